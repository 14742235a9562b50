//! `GET /api/token/price`

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::time::Instant;
use tracing::{info, warn};

use crate::adapters::api_handler::{ApiResponse, ApiState};
use crate::domain::PriceError;

/// Status returned to the client when the upstream price source fails.
pub fn status_for(err: &PriceError) -> StatusCode {
    match err {
        PriceError::Timeout => StatusCode::GATEWAY_TIMEOUT,
        PriceError::Network(_) | PriceError::Upstream { .. } | PriceError::Malformed(_) => {
            StatusCode::BAD_GATEWAY
        }
    }
}

/// Relays the current token price as a bare JSON number.
pub async fn get_token_price(State(state): State<ApiState>) -> Response {
    let started = Instant::now();
    let result = state.price_source.fetch_token_price().await;
    state
        .metrics
        .token_price_fetch_duration
        .observe(started.elapsed().as_secs_f64());

    match result {
        Ok(token) => {
            info!(
                source = state.price_source.name(),
                price = token.price,
                "Token price fetched"
            );
            state.metrics.token_price_requests.with_label_values(&["ok"]).inc();
            state.metrics.last_token_price.set(token.price);
            (StatusCode::OK, Json(token.price)).into_response()
        }
        Err(e) => {
            let status = status_for(&e);
            warn!(
                source = state.price_source.name(),
                status = status.as_u16(),
                "Failed to fetch token price: {}",
                e
            );
            let outcome = match &e {
                PriceError::Timeout => "timeout",
                _ => "error",
            };
            state
                .metrics
                .token_price_requests
                .with_label_values(&[outcome])
                .inc();
            (
                status,
                Json(ApiResponse::<f64>::error(format!(
                    "Token price unavailable: {}",
                    e
                ))),
            )
                .into_response()
        }
    }
}
