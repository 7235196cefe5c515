//! Pricing Service - Subscription line-item pricing and billing-period computation.

pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
