use prometheus::{CounterVec, Encoder, Gauge, Histogram, HistogramOpts, Opts, Registry, TextEncoder};
use std::sync::Arc;

pub struct MetricsCollector {
    registry: Registry,

    // Token price endpoint
    pub token_price_requests: CounterVec,
    pub token_price_fetch_duration: Histogram,
    pub last_token_price: Gauge,

    // Pricing quotes
    pub quotes_total: CounterVec,
}

impl MetricsCollector {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let token_price_requests = CounterVec::new(
            Opts::new(
                "dashprice_token_price_requests_total",
                "Total token price requests by outcome",
            ),
            &["outcome"],
        )?;
        registry.register(Box::new(token_price_requests.clone()))?;

        let token_price_fetch_duration = Histogram::with_opts(HistogramOpts::new(
            "dashprice_token_price_fetch_seconds",
            "Upstream token price fetch duration in seconds",
        ))?;
        registry.register(Box::new(token_price_fetch_duration.clone()))?;

        let last_token_price = Gauge::new(
            "dashprice_last_token_price",
            "Most recent token price returned by the upstream",
        )?;
        registry.register(Box::new(last_token_price.clone()))?;

        let quotes_total = CounterVec::new(
            Opts::new("dashprice_quotes_total", "Total pricing quotes by product and outcome"),
            &["product", "outcome"],
        )?;
        registry.register(Box::new(quotes_total.clone()))?;

        Ok(Self {
            registry,
            token_price_requests,
            token_price_fetch_duration,
            last_token_price,
            quotes_total,
        })
    }

    pub fn encode(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

pub struct MetricsHandler {
    collector: Arc<MetricsCollector>,
}

impl MetricsHandler {
    pub fn new(collector: Arc<MetricsCollector>) -> Self {
        Self { collector }
    }

    pub async fn metrics(&self) -> String {
        self.collector.encode().unwrap_or_else(|e| {
            tracing::error!("Failed to encode metrics: {}", e);
            String::from("# Error encoding metrics\n")
        })
    }
}
