//! Quote handler: price line items and, optionally, the first billing period.

use axum::{extract::State, Json};
use rust_decimal::prelude::ToPrimitive;
use service_core::error::AppError;
use service_core::utils::ValidatedJson;
use std::time::Instant;

use crate::dtos::{QuoteRequest, QuoteResponse, RecurrenceSummary};
use crate::models::{LineItemInput, RecurrenceSpec};
use crate::services::metrics::PRICING_DURATION;
use crate::services::{
    cadence_label, compute_line_items, describe_interval, record_error, record_http_request,
    record_http_request_duration, record_line_items_dropped, record_quote, record_quoted_amount,
    resolve_currency,
};
use crate::startup::AppState;

const ROUTE: &str = "/v1/quotes";

/// Price a set of line items against the supplied catalogue snapshot.
#[tracing::instrument(skip(state, payload), fields(route = ROUTE))]
pub async fn create_quote(
    State(state): State<AppState>,
    payload: Result<ValidatedJson<QuoteRequest>, AppError>,
) -> Result<Json<QuoteResponse>, AppError> {
    let start = Instant::now();
    let result = payload
        .map_err(|e| {
            tracing::warn!(error = %e, "Quote request rejected");
            let kind = match &e {
                AppError::ValidationError(_) => "validation",
                _ => "invalid_body",
            };
            record_error(kind, ROUTE);
            e
        })
        .and_then(|ValidatedJson(req)| quote(&state, req));

    let status = match &result {
        Ok(_) => {
            record_quote("ok");
            "200"
        }
        Err(e) => {
            record_quote("rejected");
            match e {
                AppError::ValidationError(_) => "422",
                _ => "400",
            }
        }
    };
    record_http_request(ROUTE, status);
    record_http_request_duration(ROUTE, start.elapsed().as_secs_f64());

    result.map(Json)
}

fn quote(state: &AppState, req: QuoteRequest) -> Result<QuoteResponse, AppError> {
    let recurrence = req
        .recurrence
        .map(|r| {
            RecurrenceSpec::new(
                r.interval_count,
                r.interval,
                r.start_date,
                state.config.pricing.max_interval_count,
            )
        })
        .transpose()
        .map_err(|e| {
            tracing::warn!(error = %e, "Quote recurrence rejected");
            record_error(e.kind(), ROUTE);
            AppError::from(e)
        })?;

    let line_items: Vec<LineItemInput> = req.line_items.into_iter().map(Into::into).collect();

    let timer = PRICING_DURATION
        .with_label_values(&["compute_line_items"])
        .start_timer();
    let result = compute_line_items(&line_items, &req.products, &req.taxes);
    timer.observe_duration();

    let totals = result.map_err(|e| {
        tracing::warn!(error = %e, "Quote amounts out of range");
        record_error(e.kind(), ROUTE);
        AppError::from(e)
    })?;

    let dropped = line_items.len() - totals.items.len();
    if dropped > 0 {
        record_line_items_dropped(dropped);
    }

    let currency = match resolve_currency(&totals.items, &state.config.pricing.default_currency) {
        Ok(currency) => Some(currency),
        Err(e) => {
            tracing::info!(error = %e, "Quote spans several currencies");
            None
        }
    };

    if let Some(currency) = &currency {
        match totals.total.to_f64() {
            Some(amount) => record_quoted_amount(currency, amount),
            None => tracing::debug!(
                total = %totals.total,
                currency = %currency,
                "Quoted amount not representable as f64, skipping metric"
            ),
        }
    }

    let recurrence = recurrence
        .map(|spec| {
            spec.period_end().map(|period_end| RecurrenceSummary {
                interval_count: spec.interval_count,
                interval: spec.interval,
                start_date: spec.start_date,
                period_end,
                label: describe_interval(spec.interval_count, spec.interval),
                cadence: cadence_label(spec.interval_count, spec.interval),
            })
        })
        .transpose()
        .map_err(|e| {
            tracing::warn!(error = %e, "Billing period could not be computed");
            record_error(e.kind(), ROUTE);
            AppError::from(e)
        })?;

    tracing::info!(
        line_items = line_items.len(),
        priced_items = totals.items.len(),
        dropped = dropped,
        subtotal = %totals.subtotal,
        tax_total = %totals.tax_total,
        total = %totals.total,
        "Quote computed"
    );

    Ok(QuoteResponse {
        totals,
        currency,
        recurrence,
    })
}
