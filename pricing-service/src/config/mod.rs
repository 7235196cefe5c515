//! Configuration module for pricing-service.

use crate::services::DraftSettings;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone)]
pub struct PricingConfig {
    pub common: core_config::Config,
    pub service_name: String,
    pub service_version: String,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    pub pricing: PricingSettings,
}

#[derive(Debug, Clone)]
pub struct PricingSettings {
    pub default_currency: String,
    pub max_interval_count: u32,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            default_currency: "USD".to_string(),
            max_interval_count: 365,
        }
    }
}

impl PricingSettings {
    fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let max_interval_count = match env::var("PRICING_MAX_INTERVAL_COUNT") {
            Ok(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|max| *max >= 1)
                .ok_or_else(|| {
                    AppError::ConfigError(anyhow::anyhow!(
                        "PRICING_MAX_INTERVAL_COUNT must be a positive integer, got '{}'",
                        raw
                    ))
                })?,
            Err(_) => defaults.max_interval_count,
        };

        let default_currency = env::var("PRICING_DEFAULT_CURRENCY")
            .map(|c| c.trim().to_uppercase())
            .ok()
            .filter(|c| !c.is_empty())
            .unwrap_or(defaults.default_currency);

        Ok(Self {
            default_currency,
            max_interval_count,
        })
    }

    pub fn draft_settings(&self) -> DraftSettings {
        DraftSettings {
            default_currency: self.default_currency.clone(),
            max_interval_count: self.max_interval_count,
        }
    }
}

impl PricingConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(Self {
            common,
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| "pricing-service".to_string()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|s| !s.is_empty()),
            pricing: PricingSettings::from_env()?,
        })
    }
}
