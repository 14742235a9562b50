//! Shared state and response envelope for the `/api` routes

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::adapters::metrics_handler::MetricsCollector;
use crate::domain::TokenPricePort;

/// State shared by every `/api` handler
#[derive(Clone)]
pub struct ApiState {
    pub price_source: Arc<dyn TokenPricePort>,
    pub metrics: Arc<MetricsCollector>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
