use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub mod validator;

use crate::cli::Cli;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PRICE_SOURCE_URL: &str = "https://api.pancakeswap.info";
/// CAKE on BNB Smart Chain.
pub const DEFAULT_TOKEN_ADDRESS: &str = "0x0E09FaBB73Bd3Ade0a17ECC321fD13a19e81cE82";
pub const DEFAULT_PRICE_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub price_source: PriceSourceSettings,
    #[serde(default)]
    pub rate_limit: Option<RateLimitConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Upstream token price API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PriceSourceSettings {
    pub base_url: String,
    pub token_address: String,
    #[serde(default = "default_price_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_price_timeout_ms() -> u64 {
    DEFAULT_PRICE_TIMEOUT_MS
}

impl PriceSourceSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty() && !self.token_address.trim().is_empty()
    }
}

impl Default for PriceSourceSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PRICE_SOURCE_URL.to_string(),
            token_address: DEFAULT_TOKEN_ADDRESS.to_string(),
            timeout_ms: DEFAULT_PRICE_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RateLimitConfig {
    pub enabled: bool,
    pub requests_per_second: u32,
    pub burst_size: u32,
}

impl Settings {
    /// Create settings from CLI arguments (config file plus CLI/env overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let mut settings = Self::load(&cli.config)?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);

        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let settings = Self::load(path.as_ref())?;
        settings.validate()?;
        Ok(settings)
    }

    fn load(path: &Path) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", DEFAULT_PORT as i64)?
            .set_default("price_source.base_url", DEFAULT_PRICE_SOURCE_URL)?
            .set_default("price_source.token_address", DEFAULT_TOKEN_ADDRESS)?
            .set_default("price_source.timeout_ms", DEFAULT_PRICE_TIMEOUT_MS as i64)?
            .build()?;

        Ok(s.try_deserialize()?)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(url) = &cli.price_source_url {
            self.price_source.base_url = url.clone();
        }
        if let Some(address) = &cli.token_address {
            self.price_source.token_address = address.clone();
        }
        if let Some(timeout_ms) = cli.price_timeout_ms {
            self.price_source.timeout_ms = timeout_ms;
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }
}
