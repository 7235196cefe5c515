//! Request and response bodies for the HTTP API.

use crate::models::{
    Customer, DraftInput, DraftMode, Interval, LineItemInput, LineItemTotals, Product, Tax,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LineItemRequest {
    #[validate(length(min = 1, message = "Line item id is required"))]
    pub id: String,
    #[serde(default)]
    pub product_id: String,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub tax_id: Option<String>,
}

impl From<LineItemRequest> for LineItemInput {
    fn from(req: LineItemRequest) -> Self {
        LineItemInput {
            id: req.id,
            product_id: req.product_id,
            quantity: req.quantity,
            tax_id: req.tax_id.filter(|t| !t.is_empty()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRequest {
    #[validate(range(min = 1, message = "Interval count must be at least 1"))]
    pub interval_count: i64,
    pub interval: Interval,
    pub start_date: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[validate(nested)]
    #[serde(default)]
    pub line_items: Vec<LineItemRequest>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub taxes: Vec<Tax>,
    #[validate(nested)]
    pub recurrence: Option<RecurrenceRequest>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceSummary {
    pub interval_count: u32,
    pub interval: Interval,
    pub start_date: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
    /// `"month"`, `"3 months"`.
    pub label: String,
    /// `"Every 3 months"`.
    pub cadence: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    #[serde(flatten)]
    pub totals: LineItemTotals,
    /// `None` when the priced items mix currencies.
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<RecurrenceSummary>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DraftRequest {
    #[serde(flatten)]
    pub mode: DraftMode,
    #[serde(default)]
    pub customer_id: String,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[validate(nested)]
    #[serde(default)]
    pub line_items: Vec<LineItemRequest>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub taxes: Vec<Tax>,
    pub interval_count: i64,
    pub interval: Interval,
    /// Defaults to the time the request is handled.
    pub start_date: Option<DateTime<Utc>>,
}

impl DraftRequest {
    pub fn into_input(self, now: DateTime<Utc>) -> DraftInput {
        DraftInput {
            mode: self.mode,
            customer_id: self.customer_id,
            customers: self.customers,
            line_items: self.line_items.into_iter().map(LineItemInput::from).collect(),
            products: self.products,
            taxes: self.taxes,
            interval_count: self.interval_count,
            interval: self.interval,
            start_date: self.start_date.unwrap_or(now),
        }
    }
}
