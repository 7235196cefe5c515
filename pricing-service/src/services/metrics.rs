//! Metrics module for pricing-service.
//! Provides Prometheus metrics for quotes, drafts and the HTTP surface.

use once_cell::sync::Lazy;
use prometheus::{
    histogram_opts, opts, register_counter_vec, register_histogram_vec, register_int_counter,
    register_int_counter_vec, CounterVec, Encoder, HistogramVec, IntCounter, IntCounterVec,
    TextEncoder,
};
use std::sync::OnceLock;

/// Pricing computation duration histogram
pub static PRICING_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        histogram_opts!(
            "pricing_computation_duration_seconds",
            "Pricing computation duration",
            vec![0.00001, 0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05]
        ),
        &["operation"]
    )
    .expect("Failed to register PRICING_DURATION")
});

/// Quotes counter by outcome
pub static QUOTES_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Line items dropped because their product did not resolve
pub static LINE_ITEMS_DROPPED_TOTAL: OnceLock<IntCounter> = OnceLock::new();

/// Drafts counter by mode and outcome
pub static DRAFTS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// HTTP request counter
pub static HTTP_REQUESTS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// HTTP request duration histogram
pub static HTTP_REQUEST_DURATION: OnceLock<HistogramVec> = OnceLock::new();

/// Error counter for alerting
pub static ERRORS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Quoted amount by currency (monetary tracking)
pub static QUOTED_AMOUNT_TOTAL: OnceLock<CounterVec> = OnceLock::new();

/// Initialize all metrics. Call once at startup.
pub fn init_metrics() {
    QUOTES_TOTAL.get_or_init(|| {
        register_int_counter_vec!(
            opts!("pricing_quotes_total", "Total quotes by outcome"),
            &["outcome"]
        )
        .expect("Failed to register QUOTES_TOTAL")
    });

    LINE_ITEMS_DROPPED_TOTAL.get_or_init(|| {
        register_int_counter!(opts!(
            "pricing_line_items_dropped_total",
            "Line items excluded because their product did not resolve"
        ))
        .expect("Failed to register LINE_ITEMS_DROPPED_TOTAL")
    });

    DRAFTS_TOTAL.get_or_init(|| {
        register_int_counter_vec!(
            opts!(
                "pricing_drafts_total",
                "Total subscription drafts by mode and outcome"
            ),
            &["mode", "outcome"]
        )
        .expect("Failed to register DRAFTS_TOTAL")
    });

    HTTP_REQUESTS_TOTAL.get_or_init(|| {
        register_int_counter_vec!(
            opts!("pricing_http_requests_total", "Total HTTP requests"),
            &["route", "status"]
        )
        .expect("Failed to register HTTP_REQUESTS_TOTAL")
    });

    HTTP_REQUEST_DURATION.get_or_init(|| {
        register_histogram_vec!(
            histogram_opts!(
                "pricing_http_request_duration_seconds",
                "HTTP request duration",
                vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]
            ),
            &["route"]
        )
        .expect("Failed to register HTTP_REQUEST_DURATION")
    });

    ERRORS_TOTAL.get_or_init(|| {
        register_int_counter_vec!(
            opts!("pricing_errors_total", "Total errors by type for alerting"),
            &["error_type", "route"]
        )
        .expect("Failed to register ERRORS_TOTAL")
    });

    QUOTED_AMOUNT_TOTAL.get_or_init(|| {
        register_counter_vec!(
            opts!(
                "pricing_quoted_amount_total",
                "Total quoted amount by currency"
            ),
            &["currency"]
        )
        .expect("Failed to register QUOTED_AMOUNT_TOTAL")
    });

    // Force initialization of lazy statics
    let _ = &*PRICING_DURATION;
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

/// Record a quote.
pub fn record_quote(outcome: &str) {
    if let Some(counter) = QUOTES_TOTAL.get() {
        counter.with_label_values(&[outcome]).inc();
    }
}

/// Record line items that were dropped during pricing.
pub fn record_line_items_dropped(count: usize) {
    if let Some(counter) = LINE_ITEMS_DROPPED_TOTAL.get() {
        counter.inc_by(count as u64);
    }
}

/// Record a draft.
pub fn record_draft(mode: &str, outcome: &str) {
    if let Some(counter) = DRAFTS_TOTAL.get() {
        counter.with_label_values(&[mode, outcome]).inc();
    }
}

/// Record an HTTP request.
pub fn record_http_request(route: &str, status: &str) {
    if let Some(counter) = HTTP_REQUESTS_TOTAL.get() {
        counter.with_label_values(&[route, status]).inc();
    }
}

/// Record HTTP request duration.
pub fn record_http_request_duration(route: &str, duration_secs: f64) {
    if let Some(histogram) = HTTP_REQUEST_DURATION.get() {
        histogram.with_label_values(&[route]).observe(duration_secs);
    }
}

/// Record an error for alerting.
pub fn record_error(error_type: &str, route: &str) {
    if let Some(counter) = ERRORS_TOTAL.get() {
        counter.with_label_values(&[error_type, route]).inc();
    }
}

/// Record a quoted amount for financial tracking.
pub fn record_quoted_amount(currency: &str, amount: f64) {
    if let Some(counter) = QUOTED_AMOUNT_TOTAL.get() {
        counter.with_label_values(&[currency]).inc_by(amount.abs());
    }
}
