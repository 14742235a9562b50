//! Token price value type and the port used to fetch it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current market price of the token, in the upstream's quote currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TokenPrice {
    pub price: f64,
}

impl TokenPrice {
    /// Builds a price, rejecting values that cannot be a market price.
    pub fn new(price: f64) -> PriceResult<Self> {
        if price.is_finite() && price >= 0.0 {
            Ok(Self { price })
        } else {
            Err(PriceError::Malformed(format!("Invalid price value: {}", price)))
        }
    }
}

/// Errors returned by a token price source
#[derive(Debug, Error)]
pub enum PriceError {
    /// Upstream did not answer in time
    #[error("Price source timed out")]
    Timeout,

    /// Connection or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Upstream answered with a non-success status
    #[error("Upstream error: {status} - {message}")]
    Upstream { status: u16, message: String },

    /// Upstream payload could not be understood
    #[error("Malformed price payload: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for PriceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PriceError::Timeout
        } else if err.is_connect() {
            PriceError::Network(format!("Connection error: {}", err))
        } else if err.is_decode() {
            PriceError::Malformed(err.to_string())
        } else {
            PriceError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for PriceError {
    fn from(err: serde_json::Error) -> Self {
        PriceError::Malformed(err.to_string())
    }
}

pub type PriceResult<T> = Result<T, PriceError>;

#[async_trait]
pub trait TokenPricePort: Send + Sync {
    /// Short name of the source, used in logs and metrics.
    fn name(&self) -> &str;

    async fn fetch_token_price(&self) -> PriceResult<TokenPrice>;
}
