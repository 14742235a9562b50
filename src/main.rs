use clap::Parser;
use dashprice::adapters::metrics_handler::MetricsCollector;
use dashprice::adapters::pancake::PancakeSwapSource;
use dashprice::cli::Cli;
use dashprice::config::Settings;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::new_with_cli(&cli)?;
    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting dashprice on {}:{}", host, port);
    info!(
        "Token price source: {} (token {}, timeout {}ms)",
        settings.price_source.base_url,
        settings.price_source.token_address,
        settings.price_source.timeout_ms
    );

    let price_source = Arc::new(PancakeSwapSource::new(&settings.price_source)?);
    let metrics = Arc::new(MetricsCollector::new()?);

    let app = dashprice::create_app(Arc::new(settings), price_source, metrics);

    // Start server
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
