//! # dashprice
//!
//! Usage-based pricing formulas and a token price relay, served over HTTP
//! with axum.
//!
//! ## Features
//!
//! - **Pricing**: monthly cost of sync and reverse API jobs, and per-request
//!   GraphQL pricing, rounded to cents
//! - **Token price**: `GET /api/token/price` relays the current price from an
//!   upstream API, mapping upstream failures to 502/504
//! - **Metrics**: Prometheus metrics for monitoring
//! - **Health Checks**: Kubernetes-ready health endpoints
//!
//! ## Quick Start
//!
//! ```rust
//! use dashprice::domain::pricing::sync_price;
//!
//! // A job every minute, billed 5s per run, duration multiplier 10
//! assert_eq!(sync_price(60.0, 5000.0, 10.0).unwrap(), 7.56);
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;

use crate::adapters::api_handler::ApiState;
use crate::adapters::health_handler::HealthHandler;
use crate::adapters::metrics_handler::{MetricsCollector, MetricsHandler};
use crate::adapters::{price_handler, pricing_handler};
use crate::config::Settings;
use crate::domain::TokenPricePort;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Creates the Axum application router with all endpoints configured.
///
/// # Arguments
///
/// * `settings` - Application settings
/// * `price_source` - Upstream used by `/api/token/price`
/// * `metrics` - Shared Prometheus collector
pub fn create_app(
    settings: Arc<Settings>,
    price_source: Arc<dyn TokenPricePort>,
    metrics: Arc<MetricsCollector>,
) -> Router {
    let health_handler = Arc::new(HealthHandler::new(settings.clone()));
    let metrics_handler = Arc::new(MetricsHandler::new(metrics.clone()));

    // Public routes (never rate limited)
    let public_router = Router::new()
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .route("/health/ready", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.ready().await }
            }
        }))
        .route("/health/live", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.live().await }
            }
        }));

    let api_state = ApiState {
        price_source,
        metrics,
    };

    let api_router = Router::new()
        .route("/token/price", get(price_handler::get_token_price))
        .route("/pricing/sync", get(pricing_handler::sync_quote))
        .route("/pricing/reverse-api", get(pricing_handler::reverse_api_quote))
        .route("/pricing/graphql", get(pricing_handler::graphql_quote))
        .with_state(api_state);

    let mut protected_router = Router::new()
        .route("/metrics", get({
            let handler = metrics_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.metrics().await }
            }
        }))
        .nest("/api", api_router);

    if let Some(rate_limit) = &settings.rate_limit {
        if rate_limit.enabled {
            let limiter = crate::adapters::rate_limit::create_limiter(
                rate_limit.requests_per_second,
                rate_limit.burst_size,
            );

            protected_router = protected_router.layer(axum::middleware::from_fn_with_state(
                limiter,
                crate::adapters::rate_limit::rate_limit_middleware,
            ));
        }
    }

    public_router
        .merge(protected_router)
        .layer(TraceLayer::new_for_http())
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
}
