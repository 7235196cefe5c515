//! Reference data snapshots: products, taxes and customers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_active() -> bool {
    true
}

/// Product available for subscription line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: String,
    pub name: String,
    /// Per-unit recurring price.
    pub price: Decimal,
    /// ISO 4217 code. Empty means the service default currency.
    #[serde(default)]
    pub currency: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Tax rate that can be attached to a line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tax {
    pub id: String,
    pub name: String,
    /// Percentage, `18` meaning 18%.
    pub rate: Decimal,
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Customer a subscription is drafted for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub client_id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Find a product by id. Empty ids never resolve.
pub fn find_product<'a>(products: &'a [Product], product_id: &str) -> Option<&'a Product> {
    if product_id.is_empty() {
        return None;
    }
    products.iter().find(|p| p.product_id == product_id)
}

/// Find a tax by id. `None` and empty ids never resolve.
pub fn find_tax<'a>(taxes: &'a [Tax], tax_id: Option<&str>) -> Option<&'a Tax> {
    let tax_id = tax_id.filter(|id| !id.is_empty())?;
    taxes.iter().find(|t| t.id == tax_id)
}

/// Find a customer by client id.
pub fn find_customer<'a>(customers: &'a [Customer], client_id: &str) -> Option<&'a Customer> {
    customers.iter().find(|c| c.client_id == client_id)
}
