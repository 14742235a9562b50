//! PancakeSwap token info API client

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::PriceSourceSettings;
use crate::domain::token::{PriceError, PriceResult, TokenPrice, TokenPricePort};

/// Longest upstream error body kept in [`PriceError::Upstream`].
pub const MAX_UPSTREAM_MESSAGE_CHARS: usize = 200;

/// Fetches a token's price from `{base_url}/api/v2/tokens/{address}`.
pub struct PancakeSwapSource {
    client: reqwest::Client,
    base_url: String,
    token_address: String,
}

impl PancakeSwapSource {
    pub fn new(settings: &PriceSourceSettings) -> PriceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            token_address: settings.token_address.clone(),
        })
    }

    pub fn token_url(&self) -> String {
        format!("{}/api/v2/tokens/{}", self.base_url, self.token_address)
    }
}

#[derive(Debug, Deserialize)]
struct TokenInfoResponse {
    data: TokenInfo,
}

#[derive(Debug, Deserialize)]
struct TokenInfo {
    price: PriceValue,
}

// The API serializes prices as decimal strings; plain numbers are accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PriceValue {
    Number(f64),
    Text(String),
}

impl PriceValue {
    fn parse(&self) -> PriceResult<f64> {
        match self {
            PriceValue::Number(n) => Ok(*n),
            PriceValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|e| PriceError::Malformed(format!("Invalid price '{}': {}", s, e))),
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[async_trait]
impl TokenPricePort for PancakeSwapSource {
    fn name(&self) -> &str {
        "pancakeswap"
    }

    async fn fetch_token_price(&self) -> PriceResult<TokenPrice> {
        let url = self.token_url();
        debug!("Fetching token price from {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(PriceError::Upstream {
                status: status.as_u16(),
                message: truncate(&error_text, MAX_UPSTREAM_MESSAGE_CHARS),
            });
        }

        let body = response.bytes().await?;
        let info: TokenInfoResponse = serde_json::from_slice(&body)?;
        TokenPrice::new(info.data.price.parse()?)
    }
}
