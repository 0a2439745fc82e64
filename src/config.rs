//! Runtime configuration
//!
//! Base URL and the set of currencies to report, with environment variable
//! support for overriding the API endpoint.

use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.privatbank.ua";
pub const DEFAULT_DAYS: u32 = 1;

/// Configuration for one program run
#[derive(Debug, Clone)]
pub struct Config {
    /// Bank API endpoint, without a trailing slash
    pub base_url: String,
    /// Currency codes to extract from each day's response
    pub currencies: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            currencies: vec!["EUR".to_string(), "USD".to_string()],
        }
    }
}

impl Config {
    /// Build the default config, letting EXCHANGE_RATES_BASE_URL override
    /// the API endpoint
    pub fn from_env() -> Self {
        let mut config = Config::default();
        if let Ok(url) = env::var("EXCHANGE_RATES_BASE_URL") {
            config.base_url = url;
        }
        config
    }
}
