//! HTTP handlers for pricing-service.

pub mod quotes;
pub mod subscriptions;
