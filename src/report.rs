//! Core data types for the exchange rate report

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sale/purchase quote for a single currency, as returned by the bank
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePair {
    pub sale: f64,
    pub purchase: f64,
}

/// Rates for one day, keyed by currency code.
/// BTreeMap keeps the serialized key order stable.
pub type RateRecord = BTreeMap<String, RatePair>;

/// One day's rates keyed by the `DD.MM.YYYY` date string.
/// Carries exactly one date key; the record may be empty when none of the
/// requested currencies were present in the response.
pub type DailyReport = BTreeMap<String, RateRecord>;

/// Reports in descending date order, today first. Failed days are absent.
pub type ReportList = Vec<DailyReport>;
