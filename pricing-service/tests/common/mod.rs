//! Test helper module for pricing-service integration tests.

#![allow(dead_code)]

use pricing_service::config::{PricingConfig, PricingSettings};
use pricing_service::startup::Application;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use service_core::config::Config as CoreConfig;

/// Test application wrapper for integration tests.
pub struct TestApp {
    pub http_address: String,
    pub http_port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn a new test application on a random port.
    pub async fn spawn() -> Self {
        Self::spawn_with(PricingSettings::default()).await
    }

    /// Spawn with custom pricing settings.
    pub async fn spawn_with(pricing: PricingSettings) -> Self {
        let config = PricingConfig {
            common: CoreConfig { port: 0 },
            service_name: "pricing-service".to_string(),
            service_version: "0.1.0".to_string(),
            log_level: "warn".to_string(),
            otlp_endpoint: None,
            pricing,
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let http_port = app.http_port();
        let http_address = format!("http://127.0.0.1:{}", http_port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", http_address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            http_address,
            http_port,
            client,
        }
    }

    pub async fn post_quote(&self, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}/v1/quotes", self.http_address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_draft(&self, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}/v1/subscriptions/draft", self.http_address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// Catalogue used across tests: one product per currency plus an inactive one.
pub fn products() -> Value {
    json!([
        { "productId": "p1", "name": "Starter", "price": "50", "currency": "USD" },
        { "productId": "p2", "name": "Growth", "price": "19.99", "currency": "USD" },
        { "productId": "p3", "name": "Legacy", "price": "5", "currency": "USD", "active": false },
        { "productId": "p4", "name": "Euro Plan", "price": "30", "currency": "EUR" }
    ])
}

pub fn taxes() -> Value {
    json!([
        { "id": "t1", "name": "VAT", "rate": "10" },
        { "id": "t2", "name": "GST", "rate": "18" }
    ])
}

pub fn customers() -> Value {
    json!([
        { "clientId": "cus_1", "name": "Acme Corp", "email": "billing@acme.test" }
    ])
}

/// Read a decimal serialized as a JSON string.
pub fn decimal(value: &Value) -> Decimal {
    value
        .as_str()
        .expect("decimal should serialize as a string")
        .parse()
        .expect("invalid decimal")
}
