use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use dashprice::adapters::metrics_handler::MetricsCollector;
use dashprice::adapters::pancake::PancakeSwapSource;
use dashprice::config::{RateLimitConfig, Settings};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

fn app(settings: Settings) -> Router {
    let price_source = Arc::new(PancakeSwapSource::new(&settings.price_source).unwrap());
    let metrics = Arc::new(MetricsCollector::new().unwrap());
    dashprice::create_app(Arc::new(settings), price_source, metrics)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_pricing_quotes() {
    let app = app(Settings::default());

    let (status, body) = get(&app, "/api/pricing/sync?interval=60&timeout=5000&duration=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["price"], 7.56);

    let (status, body) =
        get(&app, "/api/pricing/reverse-api?interval=60&timeout=5000&duration=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["price"], 8.64);

    let (status, body) = get(&app, "/api/pricing/graphql?requests=1000000").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["price"], 50.0);
}

#[tokio::test]
async fn test_invalid_quote_inputs() {
    let app = app(Settings::default());

    let (status, body) = get(&app, "/api/pricing/sync?interval=0&timeout=5000&duration=10").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, _) = get(&app, "/api/pricing/graphql?requests=-5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) =
        get(&app, "/api/pricing/sync?interval=1e-300&timeout=1e300&duration=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["data"].is_null());

    // Rejected by the query extractor
    let (status, _) = get(&app, "/api/pricing/sync?interval=60").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = get(&app, "/api/pricing/graphql?requests=lots").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rate_limit_applies_to_api_but_not_health() {
    let app = app(Settings {
        rate_limit: Some(RateLimitConfig {
            enabled: true,
            requests_per_second: 1,
            burst_size: 1,
        }),
        ..Settings::default()
    });

    let (status, _) = get(&app, "/api/pricing/graphql?requests=1").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = get(&app, "/api/pricing/graphql?requests=1").await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);

    let (status, _) = get(&app, "/health/live").await;
    assert_eq!(status, StatusCode::OK);
}
