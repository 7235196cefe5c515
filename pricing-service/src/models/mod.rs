//! Domain models for pricing-service.

mod catalog;
mod line_item;
mod recurrence;
mod subscription;

pub use catalog::{find_customer, find_product, find_tax, Customer, Product, Tax};
pub use line_item::{LineItemInput, LineItemTotals, SubscriptionItem};
pub use recurrence::{Interval, RecurrenceSpec};
pub use subscription::{DraftInput, DraftMode, SubscriptionDraft, SubscriptionStatus};
