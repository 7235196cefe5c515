//! Services module for pricing-service.

pub mod calculator;
pub mod draft;
pub mod editor;
pub mod metrics;
pub mod period;

pub use calculator::{compute_line_items, price_line_item};
pub use draft::{
    build_subscription_draft, resolve_currency, summarize_product_names, DraftSettings,
};
pub use editor::{coerce_quantity, selectable_products, selectable_taxes, LineItemEditor};
pub use metrics::{
    get_metrics, init_metrics, record_draft, record_error, record_http_request,
    record_http_request_duration, record_line_items_dropped, record_quote, record_quoted_amount,
};
pub use period::{cadence_label, compute_period_end, describe_interval};
