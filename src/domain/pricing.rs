//! Usage-based pricing formulas.
//!
//! Interval-driven products (sync jobs and reverse API calls) are billed by
//! projecting a per-run timeout over a 30 day billing window. GraphQL is
//! billed per million requests. Every price is rounded to whole cents, with
//! halves rounded away from zero.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Seconds in the 30 day billing window.
pub const BILLING_WINDOW_SECS: f64 = (30 * 24 * 60 * 60) as f64;

/// Divisor that turns projected milliseconds into billable units.
pub const MS_DIVISOR: f64 = 3e10;

/// Rate applied to sync usage.
pub const SYNC_RATE: f64 = 105.0;

/// GraphQL rate, charged per [`GRAPHQL_REQUESTS_UNIT`] requests.
pub const GRAPHQL_RATE_PER_MILLION: f64 = 50.0;

/// Number of requests covered by one GraphQL rate unit.
pub const GRAPHQL_REQUESTS_UNIT: f64 = 1e6;

/// Base rate applied to reverse API usage, before markup.
pub const REVERSE_API_RATE_BASE: f64 = 100.0;

/// Markup applied on top of [`REVERSE_API_RATE_BASE`].
pub const REVERSE_API_MARKUP: f64 = 1.2;

/// Effective reverse API rate.
pub const REVERSE_API_RATE: f64 = REVERSE_API_RATE_BASE * REVERSE_API_MARKUP;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("Invalid argument {field}: {value} ({reason})")]
    InvalidArgument {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Price for {product} is out of range for the given usage")]
    Overflow { product: &'static str },
}

pub type PricingResult<T> = Result<T, PricingError>;

/// Billing tier for interval-based products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Sync,
    ReverseApi,
}

impl Tier {
    /// Effective multiplier of the tier.
    pub fn rate(self) -> f64 {
        match self {
            Tier::Sync => SYNC_RATE,
            Tier::ReverseApi => REVERSE_API_RATE,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Tier::Sync => "sync",
            Tier::ReverseApi => "reverse_api",
        }
    }

    // Reverse API keeps its base rate and markup as two separate steps so
    // cent rounding matches historical invoices.
    fn apply(self, units: f64) -> f64 {
        match self {
            Tier::Sync => units * SYNC_RATE,
            Tier::ReverseApi => units * REVERSE_API_RATE_BASE * REVERSE_API_MARKUP,
        }
    }
}

/// A single usage measurement for an interval-based product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageSample {
    /// Seconds between runs.
    pub interval: f64,
    /// Milliseconds billed per run.
    pub timeout: f64,
    /// Multiplier applied to the projected usage.
    pub duration: f64,
}

impl UsageSample {
    pub fn new(interval: f64, timeout: f64, duration: f64) -> Self {
        Self {
            interval,
            timeout,
            duration,
        }
    }

    pub fn validate(&self) -> PricingResult<()> {
        if !self.interval.is_finite() || self.interval <= 0.0 {
            return Err(PricingError::InvalidArgument {
                field: "interval",
                value: self.interval,
                reason: "must be a finite number greater than zero",
            });
        }
        non_negative("timeout", self.timeout)?;
        non_negative("duration", self.duration)?;
        Ok(())
    }

    /// Number of runs that fit in the billing window.
    pub fn runs(&self) -> f64 {
        BILLING_WINDOW_SECS / self.interval
    }

    pub fn price(&self, tier: Tier) -> PricingResult<f64> {
        interval_price(tier, self)
    }

    pub fn sync_price(&self) -> PricingResult<f64> {
        self.price(Tier::Sync)
    }

    pub fn reverse_api_price(&self) -> PricingResult<f64> {
        self.price(Tier::ReverseApi)
    }
}

/// Monthly price of `sample` billed at `tier`.
pub fn interval_price(tier: Tier, sample: &UsageSample) -> PricingResult<f64> {
    sample.validate()?;
    let total_ms = sample.runs() * sample.timeout;
    finite(
        tier.label(),
        round2(sample.duration * tier.apply(total_ms / MS_DIVISOR)),
    )
}

// Extreme but valid inputs can still overflow to infinity.
fn finite(product: &'static str, price: f64) -> PricingResult<f64> {
    if price.is_finite() {
        Ok(price)
    } else {
        Err(PricingError::Overflow { product })
    }
}

fn non_negative(field: &'static str, value: f64) -> PricingResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PricingError::InvalidArgument {
            field,
            value,
            reason: "must be a finite, non-negative number",
        })
    }
}

/// Rounds to two decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Monthly price of a sync job running every `interval` seconds.
pub fn sync_price(interval: f64, timeout: f64, duration: f64) -> PricingResult<f64> {
    UsageSample::new(interval, timeout, duration).sync_price()
}

/// Monthly price of a reverse API job running every `interval` seconds.
pub fn reverse_api_price(interval: f64, timeout: f64, duration: f64) -> PricingResult<f64> {
    UsageSample::new(interval, timeout, duration).reverse_api_price()
}

/// Price of `requests` GraphQL requests.
pub fn graphql_price(requests: f64) -> PricingResult<f64> {
    non_negative("requests", requests)?;
    finite(
        "graphql",
        round2((requests / GRAPHQL_REQUESTS_UNIT) * GRAPHQL_RATE_PER_MILLION),
    )
}
