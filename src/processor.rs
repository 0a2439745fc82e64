//! Day-range iteration and rate extraction
//!
//! Walks backwards from today one day at a time, fetching each day's rates
//! sequentially and shaping them into the report model. A failed fetch only
//! costs that day; a malformed response body aborts the run.

use anyhow::{Context, Result};
use chrono::{Duration, Local};
use serde_json::Value;
use tracing::{info, warn};

use crate::fetcher::RateSource;
use crate::report::{DailyReport, RatePair, RateRecord, ReportList};

/// Format "today minus `offset` days" as the API's `DD.MM.YYYY` date key
pub fn date_key(offset: u32) -> String {
    let date = Local::now() - Duration::days(offset as i64);
    date.format("%d.%m.%Y").to_string()
}

pub struct RateProcessor<S> {
    source: S,
}

impl<S: RateSource> RateProcessor<S> {
    pub fn new(source: S) -> Self {
        RateProcessor { source }
    }

    /// Fetch and extract rates for the last `days` days, today first.
    ///
    /// Fetch errors are logged and the day is skipped, so the output may be
    /// shorter than `days`. Extraction errors propagate.
    pub async fn rates_for_days(&self, days: u32, currencies: &[&str]) -> Result<ReportList> {
        let mut reports = ReportList::new();

        for offset in 0..days {
            let date = date_key(offset);
            match self.source.fetch_rates(&date).await {
                Ok(response) => {
                    reports.push(extract_rates(&response, &date, currencies)?);
                }
                Err(err) => warn!("skipping {}: {}", date, err),
            }
        }

        info!("collected {} of {} requested days", reports.len(), days);
        Ok(reports)
    }
}

/// Pull the requested currencies out of one day's API response.
///
/// A currency absent from `exchangeRate` is silently omitted from the
/// record. A response without an `exchangeRate` array, or a matching entry
/// without its rate fields, is an error.
pub fn extract_rates(response: &Value, date: &str, currencies: &[&str]) -> Result<DailyReport> {
    let entries = response
        .get("exchangeRate")
        .and_then(Value::as_array)
        .with_context(|| format!("missing exchangeRate array in response for {}", date))?;

    let mut record = RateRecord::new();
    for &currency in currencies {
        let entry = entries
            .iter()
            .find(|e| e.get("currency").and_then(Value::as_str) == Some(currency));

        let Some(entry) = entry else {
            continue;
        };

        let sale = entry
            .get("saleRate")
            .and_then(Value::as_f64)
            .with_context(|| format!("missing saleRate for {} on {}", currency, date))?;
        let purchase = entry
            .get("purchaseRate")
            .and_then(Value::as_f64)
            .with_context(|| format!("missing purchaseRate for {} on {}", currency, date))?;

        record.insert(currency.to_string(), RatePair { sale, purchase });
    }

    let mut report = DailyReport::new();
    report.insert(date.to_string(), record);
    Ok(report)
}
