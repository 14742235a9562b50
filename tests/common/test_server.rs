use axum::Router;
use dashprice::adapters::metrics_handler::MetricsCollector;
use dashprice::adapters::pancake::PancakeSwapSource;
use dashprice::config::{PriceSourceSettings, Settings};
use std::net::SocketAddr;
use std::sync::Arc;

pub struct TestServer {
    pub addr: SocketAddr,
    pub base_url: String,
}

impl TestServer {
    /// Starts dashprice against the given upstream base URL.
    pub async fn new(upstream_url: &str) -> Self {
        Self::with_settings(Settings {
            price_source: PriceSourceSettings {
                base_url: upstream_url.to_string(),
                token_address: "0xtoken".to_string(),
                timeout_ms: 200,
            },
            ..Settings::default()
        })
        .await
    }

    pub async fn with_settings(settings: Settings) -> Self {
        let price_source = Arc::new(PancakeSwapSource::new(&settings.price_source).unwrap());
        let metrics = Arc::new(MetricsCollector::new().unwrap());
        let app = dashprice::create_app(Arc::new(settings), price_source, metrics);

        let addr = serve(app).await;
        TestServer {
            addr,
            base_url: format!("http://{}", addr),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Serves `router` on a random local port.
pub async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

/// Stub upstream answering the token info route with `body`.
pub async fn upstream(status: axum::http::StatusCode, body: &'static str) -> String {
    let router = Router::new().route(
        "/api/v2/tokens/0xtoken",
        axum::routing::get(move || async move { (status, body) }),
    );
    format!("http://{}", serve(router).await)
}
