use clap::Parser;
use std::path::PathBuf;

/// Usage pricing and token price service
#[derive(Parser, Debug, Clone)]
#[command(name = "dashprice", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "DASHPRICE_CONFIG", default_value = "dashprice.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "DASHPRICE_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "DASHPRICE_PORT")]
    pub port: Option<u16>,

    /// Base URL of the token price API
    #[arg(long, env = "DASHPRICE_PRICE_SOURCE_URL")]
    pub price_source_url: Option<String>,

    /// Address of the token to quote
    #[arg(long, env = "DASHPRICE_TOKEN_ADDRESS")]
    pub token_address: Option<String>,

    /// Upstream request timeout in milliseconds
    #[arg(long, env = "DASHPRICE_PRICE_TIMEOUT_MS")]
    pub price_timeout_ms: Option<u64>,
}
