//! Subscription draft model.

use super::catalog::{Customer, Product, Tax};
use super::line_item::{LineItemInput, SubscriptionItem};
use super::recurrence::Interval;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Subscription status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Canceled,
    PastDue,
    Trialing,
    Paused,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Canceled => "canceled",
            SubscriptionStatus::PastDue => "past_due",
            SubscriptionStatus::Trialing => "trialing",
            SubscriptionStatus::Paused => "paused",
        }
    }
}

/// Whether the draft creates a new subscription or replaces an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DraftMode {
    Create,
    Edit {
        #[serde(rename = "subscriptionId")]
        subscription_id: String,
    },
}

impl DraftMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftMode::Create => "create",
            DraftMode::Edit { .. } => "edit",
        }
    }
}

/// Everything the draft builder needs, as explicit snapshots.
#[derive(Debug, Clone)]
pub struct DraftInput {
    pub mode: DraftMode,
    pub customer_id: String,
    pub customers: Vec<Customer>,
    pub line_items: Vec<LineItemInput>,
    pub products: Vec<Product>,
    pub taxes: Vec<Tax>,
    /// Unvalidated, as entered by the operator.
    pub interval_count: i64,
    pub interval: Interval,
    pub start_date: DateTime<Utc>,
}

/// Payload handed to the subscriptions resource on submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDraft {
    #[serde(flatten)]
    pub mode: DraftMode,
    pub customer_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub product_id: String,
    pub product_name: String,
    pub items: Vec<SubscriptionItem>,
    pub status: SubscriptionStatus,
    pub amount: Decimal,
    pub subtotal: Decimal,
    pub tax_total: Decimal,
    pub currency: String,
    pub interval_count: u32,
    pub interval: Interval,
    pub start_date: DateTime<Utc>,
    pub current_period_start: DateTime<Utc>,
    pub current_period_end: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
