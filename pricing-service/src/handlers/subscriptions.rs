//! Subscription draft handler.

use axum::{extract::State, Json};
use chrono::Utc;
use service_core::error::AppError;
use service_core::utils::ValidatedJson;
use std::time::Instant;

use crate::dtos::DraftRequest;
use crate::models::SubscriptionDraft;
use crate::services::metrics::PRICING_DURATION;
use crate::services::{
    build_subscription_draft, record_draft, record_error, record_http_request,
    record_http_request_duration,
};
use crate::startup::AppState;

const ROUTE: &str = "/v1/subscriptions/draft";

/// Validate the subscription form and return the payload to persist.
#[tracing::instrument(skip(state, payload), fields(route = ROUTE))]
pub async fn create_draft(
    State(state): State<AppState>,
    payload: Result<ValidatedJson<DraftRequest>, AppError>,
) -> Result<Json<SubscriptionDraft>, AppError> {
    let start = Instant::now();

    let (mode, result) = match payload {
        Ok(ValidatedJson(req)) => (req.mode.as_str(), draft(&state, req)),
        Err(e) => {
            tracing::warn!(error = %e, "Draft request rejected");
            let kind = match &e {
                AppError::ValidationError(_) => "validation",
                _ => "invalid_body",
            };
            record_error(kind, ROUTE);
            ("unknown", Err(e))
        }
    };

    let status = match &result {
        Ok(_) => {
            record_draft(mode, "ok");
            "200"
        }
        Err(e) => {
            record_draft(mode, "rejected");
            match e {
                AppError::ValidationError(_) => "422",
                AppError::NotFound(_) => "404",
                _ => "400",
            }
        }
    };
    record_http_request(ROUTE, status);
    record_http_request_duration(ROUTE, start.elapsed().as_secs_f64());

    result.map(Json)
}

fn draft(state: &AppState, req: DraftRequest) -> Result<SubscriptionDraft, AppError> {
    let now = Utc::now();
    let input = req.into_input(now);

    tracing::info!(
        mode = input.mode.as_str(),
        customer_id = %input.customer_id,
        line_items = input.line_items.len(),
        interval_count = input.interval_count,
        interval = %input.interval,
        "Building subscription draft"
    );

    let timer = PRICING_DURATION
        .with_label_values(&["build_draft"])
        .start_timer();
    let result = build_subscription_draft(&input, &state.config.pricing.draft_settings(), now);
    timer.observe_duration();

    let draft = result.map_err(|e| {
        tracing::warn!(error = %e, customer_id = %input.customer_id, "Subscription draft rejected");
        record_error(e.kind(), ROUTE);
        AppError::from(e)
    })?;

    tracing::info!(
        customer_id = %draft.customer_id,
        items = draft.items.len(),
        amount = %draft.amount,
        currency = %draft.currency,
        current_period_end = %draft.current_period_end,
        "Subscription draft built"
    );

    Ok(draft)
}
