//! Pricing quote endpoints under `/api/pricing`

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adapters::api_handler::{ApiResponse, ApiState};
use crate::domain::{graphql_price, interval_price, PricingResult, Tier, UsageSample};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    Sync,
    ReverseApi,
    Graphql,
}

impl Product {
    pub fn as_str(self) -> &'static str {
        match self {
            Product::Sync => "sync",
            Product::ReverseApi => "reverse_api",
            Product::Graphql => "graphql",
        }
    }
}

impl From<Tier> for Product {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Sync => Product::Sync,
            Tier::ReverseApi => Product::ReverseApi,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Quote {
    pub product: Product,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
pub struct IntervalQuery {
    pub interval: f64,
    pub timeout: f64,
    pub duration: f64,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlQuery {
    pub requests: f64,
}

fn quote_response(state: &ApiState, product: Product, result: PricingResult<f64>) -> Response {
    match result {
        Ok(price) => {
            debug!(product = product.as_str(), price, "Quoted price");
            state
                .metrics
                .quotes_total
                .with_label_values(&[product.as_str(), "ok"])
                .inc();
            (StatusCode::OK, Json(ApiResponse::success(Quote { product, price }))).into_response()
        }
        Err(e) => {
            debug!(product = product.as_str(), "Rejected quote: {}", e);
            state
                .metrics
                .quotes_total
                .with_label_values(&[product.as_str(), "invalid"])
                .inc();
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<Quote>::error(e.to_string())),
            )
                .into_response()
        }
    }
}

fn interval_quote(state: &ApiState, tier: Tier, query: &IntervalQuery) -> Response {
    let sample = UsageSample::new(query.interval, query.timeout, query.duration);
    quote_response(state, tier.into(), interval_price(tier, &sample))
}

pub async fn sync_quote(
    State(state): State<ApiState>,
    Query(query): Query<IntervalQuery>,
) -> Response {
    interval_quote(&state, Tier::Sync, &query)
}

pub async fn reverse_api_quote(
    State(state): State<ApiState>,
    Query(query): Query<IntervalQuery>,
) -> Response {
    interval_quote(&state, Tier::ReverseApi, &query)
}

pub async fn graphql_quote(
    State(state): State<ApiState>,
    Query(query): Query<GraphQlQuery>,
) -> Response {
    quote_response(&state, Product::Graphql, graphql_price(query.requests))
}
