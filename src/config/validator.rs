use thiserror::Error;

use crate::config::{PriceSourceSettings, RateLimitConfig, ServerSettings, Settings};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        Self::validate_server(&settings.server, &mut errors);
        Self::validate_price_source(&settings.price_source, &mut errors);

        if let Some(rate_limit) = &settings.rate_limit {
            Self::validate_rate_limit(rate_limit, &mut errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(server: &ServerSettings, errors: &mut Vec<ValidationError>) {
        if server.host.is_empty() {
            errors.push(ValidationError::MissingField("server.host".to_string()));
        }

        if server.port == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }
    }

    fn validate_price_source(source: &PriceSourceSettings, errors: &mut Vec<ValidationError>) {
        if source.base_url.trim().is_empty() {
            errors.push(ValidationError::MissingField(
                "price_source.base_url".to_string(),
            ));
        } else if !(source.base_url.starts_with("http://")
            || source.base_url.starts_with("https://"))
        {
            errors.push(ValidationError::InvalidValue {
                field: "price_source.base_url".to_string(),
                reason: format!("'{}' must start with http:// or https://", source.base_url),
            });
        }

        if source.token_address.trim().is_empty() {
            errors.push(ValidationError::MissingField(
                "price_source.token_address".to_string(),
            ));
        }

        if source.timeout_ms == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "price_source.timeout_ms".to_string(),
                reason: "Timeout must be greater than 0".to_string(),
            });
        }
    }

    fn validate_rate_limit(rate_limit: &RateLimitConfig, errors: &mut Vec<ValidationError>) {
        if !rate_limit.enabled {
            return;
        }

        if rate_limit.requests_per_second == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "rate_limit.requests_per_second".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if rate_limit.burst_size == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "rate_limit.burst_size".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }
    }
}
