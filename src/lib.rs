//! Exchange rate reporting
//!
//! Fetches historical currency exchange rates from the PrivatBank public
//! API, one day at a time, and shapes them into per-day JSON reports.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod processor;
pub mod report;

pub use config::Config;
pub use error::FetchError;
pub use fetcher::{RateFetcher, RateSource};
pub use processor::RateProcessor;
pub use report::*;
