//! Line item models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_quantity() -> u32 {
    1
}

/// Line item as edited in the subscription form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemInput {
    pub id: String,
    /// May be empty while the operator has not picked a product yet.
    #[serde(default)]
    pub product_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
}

impl LineItemInput {
    /// Blank line item: no product, quantity 1, no tax.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            product_id: String::new(),
            quantity: default_quantity(),
            tax_id: None,
        }
    }
}

/// Priced line item, persisted as part of a subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionItem {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<Decimal>,
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
    #[serde(default)]
    pub currency: String,
}

/// Priced items plus aggregate totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemTotals {
    pub items: Vec<SubscriptionItem>,
    pub subtotal: Decimal,
    pub tax_total: Decimal,
    pub total: Decimal,
}

impl LineItemTotals {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
