//! PrivatBank API client
//!
//! One HTTP GET per requested date against `/p24api/exchange_rates`.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::FetchError;

/// Anything that can produce the raw rate payload for one date.
///
/// The processor consumes this seam, so tests can drive the day loop
/// against a stub instead of the live API.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch_rates(&self, date: &str) -> Result<Value, FetchError>;
}

#[derive(Debug, Clone)]
pub struct RateFetcher {
    base_url: String,
    client: reqwest::Client,
}

impl RateFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        RateFetcher {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn url_for(&self, date: &str) -> String {
        format!("{}/p24api/exchange_rates?date={}", self.base_url, date)
    }
}

#[async_trait]
impl RateSource for RateFetcher {
    /// Fetch the rates for one `DD.MM.YYYY` date.
    ///
    /// The decoded JSON is returned as-is; shape checks happen at
    /// extraction time. No retries, no timeout beyond the client default.
    async fn fetch_rates(&self, date: &str) -> Result<Value, FetchError> {
        let url = self.url_for(date);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(FetchError::Status { status, url });
        }

        response.json().await.map_err(FetchError::Decode)
    }
}
