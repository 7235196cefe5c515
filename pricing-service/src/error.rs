//! Errors raised by the pricing library.

use service_core::error::AppError;
use thiserror::Error;

/// Pricing and draft errors.
///
/// Unresolved products are dropped and unresolved taxes count as zero, so
/// line-item pricing only fails when an amount overflows. The other variants
/// cover recurrence preconditions and the pre-submit checks of the draft
/// builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("Interval count must be a positive integer, got {0}")]
    InvalidIntervalCount(i64),

    #[error("Interval count {count} exceeds the maximum of {max}")]
    IntervalCountTooLarge { count: i64, max: u32 },

    #[error("Billing period end is outside the supported date range")]
    PeriodOutOfRange,

    #[error("Please select a customer")]
    MissingCustomer,

    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    #[error("Please add at least one product")]
    NoBillableItems,

    #[error("Line items mix currencies: expected {expected}, found {found}")]
    MixedCurrencies { expected: String, found: String },

    #[error("Amount out of range for line item {0}")]
    AmountOutOfRange(String),
}

impl PricingError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            PricingError::InvalidIntervalCount(_) => "invalid_interval_count",
            PricingError::IntervalCountTooLarge { .. } => "interval_count_too_large",
            PricingError::PeriodOutOfRange => "period_out_of_range",
            PricingError::MissingCustomer => "missing_customer",
            PricingError::CustomerNotFound(_) => "customer_not_found",
            PricingError::NoBillableItems => "no_billable_items",
            PricingError::MixedCurrencies { .. } => "mixed_currencies",
            PricingError::AmountOutOfRange(_) => "amount_out_of_range",
        }
    }
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::CustomerNotFound(_) => AppError::NotFound(anyhow::Error::new(err)),
            _ => AppError::BadRequest(anyhow::Error::new(err)),
        }
    }
}
