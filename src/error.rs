//! Error types for the fetch pipeline

use thiserror::Error;

/// Errors from a single day's fetch.
///
/// Non-fatal at the loop level: the processor logs these and skips the day.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("unexpected status {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("request failed")]
    Network(#[from] reqwest::Error),

    #[error("response body is not valid JSON")]
    Decode(#[source] reqwest::Error),
}
