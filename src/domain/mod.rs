pub mod pricing;
pub mod token;

pub use pricing::{
    graphql_price, interval_price, reverse_api_price, sync_price, PricingError, PricingResult, Tier,
    UsageSample,
};
pub use token::{PriceError, PriceResult, TokenPrice, TokenPricePort};
