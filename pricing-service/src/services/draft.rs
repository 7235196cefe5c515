//! Subscription draft assembly.
//!
//! Runs the pre-submit checks of the subscription form and produces the
//! payload the subscriptions resource expects.

use crate::error::PricingError;
use crate::models::{
    find_customer, DraftInput, RecurrenceSpec, SubscriptionDraft, SubscriptionItem,
    SubscriptionStatus,
};
use crate::services::calculator::compute_line_items;
use chrono::{DateTime, Utc};

/// Limits applied while building a draft.
#[derive(Debug, Clone)]
pub struct DraftSettings {
    pub default_currency: String,
    pub max_interval_count: u32,
}

impl Default for DraftSettings {
    fn default() -> Self {
        Self {
            default_currency: "USD".to_string(),
            max_interval_count: 365,
        }
    }
}

/// `"Pro"` for one item, `"Pro + 2 more"` for three.
pub fn summarize_product_names(items: &[SubscriptionItem]) -> Option<String> {
    let first = items.first()?;
    Some(match items.len() {
        1 => first.product_name.clone(),
        n => format!("{} + {} more", first.product_name, n - 1),
    })
}

/// The single currency shared by all items. Empty product currencies count
/// as `default_currency`, and so does an empty item list.
pub fn resolve_currency(
    items: &[SubscriptionItem],
    default_currency: &str,
) -> Result<String, PricingError> {
    let currency_of = |item: &SubscriptionItem| {
        if item.currency.is_empty() {
            default_currency.to_string()
        } else {
            item.currency.clone()
        }
    };

    let mut currencies = items.iter().map(currency_of);
    let expected = currencies
        .next()
        .unwrap_or_else(|| default_currency.to_string());

    match currencies.find(|c| *c != expected) {
        Some(found) => Err(PricingError::MixedCurrencies { expected, found }),
        None => Ok(expected),
    }
}

/// Validate the form state and build the persistence payload.
///
/// `now` becomes `updatedAt`; the caller supplies it so the result depends
/// only on the arguments.
pub fn build_subscription_draft(
    input: &DraftInput,
    settings: &DraftSettings,
    now: DateTime<Utc>,
) -> Result<SubscriptionDraft, PricingError> {
    if input.customer_id.is_empty() {
        return Err(PricingError::MissingCustomer);
    }

    let totals = compute_line_items(&input.line_items, &input.products, &input.taxes)?;
    if totals.is_empty() {
        return Err(PricingError::NoBillableItems);
    }

    let customer = find_customer(&input.customers, &input.customer_id)
        .ok_or_else(|| PricingError::CustomerNotFound(input.customer_id.clone()))?;

    let currency = resolve_currency(&totals.items, &settings.default_currency)?;

    let recurrence = RecurrenceSpec::new(
        input.interval_count,
        input.interval,
        input.start_date,
        settings.max_interval_count,
    )?;
    let period_end = recurrence.period_end()?;

    let product_name = summarize_product_names(&totals.items).unwrap_or_default();
    let product_id = totals.items[0].product_id.clone();

    Ok(SubscriptionDraft {
        mode: input.mode.clone(),
        customer_id: customer.client_id.clone(),
        customer_name: customer.name.clone(),
        customer_email: customer.email.clone(),
        product_id,
        product_name,
        status: SubscriptionStatus::Active,
        amount: totals.total,
        subtotal: totals.subtotal,
        tax_total: totals.tax_total,
        items: totals.items,
        currency,
        interval_count: recurrence.interval_count,
        interval: recurrence.interval,
        start_date: recurrence.start_date,
        current_period_start: recurrence.start_date,
        current_period_end: period_end,
        updated_at: now,
    })
}
