pub mod api_handler;
pub mod health_handler;
pub mod metrics_handler;
pub mod pancake;
pub mod price_handler;
pub mod pricing_handler;
pub mod rate_limit;
