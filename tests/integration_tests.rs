//! Integration tests for the exchange rate pipeline
//!
//! These drive the processor's day loop through stub rate sources instead
//! of the live PrivatBank API.

use async_trait::async_trait;
use serde_json::{json, Value};

use exchange_rates::processor::date_key;
use exchange_rates::{FetchError, RateProcessor, RateSource};

// =============================================================================
// Stub Sources
// =============================================================================

/// Returns the same body for every date
struct StaticSource {
    body: Value,
}

#[async_trait]
impl RateSource for StaticSource {
    async fn fetch_rates(&self, _date: &str) -> Result<Value, FetchError> {
        Ok(self.body.clone())
    }
}

/// Fails every date with the given HTTP status
struct FailingSource {
    status: u16,
}

#[async_trait]
impl RateSource for FailingSource {
    async fn fetch_rates(&self, date: &str) -> Result<Value, FetchError> {
        Err(FetchError::Status {
            status: reqwest::StatusCode::from_u16(self.status).unwrap(),
            url: format!("https://stub/p24api/exchange_rates?date={}", date),
        })
    }
}

/// Succeeds for a single date, fails every other with HTTP 500
struct SingleDaySource {
    ok_date: String,
    body: Value,
}

#[async_trait]
impl RateSource for SingleDaySource {
    async fn fetch_rates(&self, date: &str) -> Result<Value, FetchError> {
        if date == self.ok_date {
            Ok(self.body.clone())
        } else {
            Err(FetchError::Status {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                url: format!("https://stub/p24api/exchange_rates?date={}", date),
            })
        }
    }
}

fn well_formed_body() -> Value {
    json!({
        "exchangeRate": [
            {"currency": "EUR", "saleRate": 40.1, "purchaseRate": 39.9},
            {"currency": "USD", "saleRate": 37.5, "purchaseRate": 37.0},
        ]
    })
}

// =============================================================================
// Day Loop Tests
// =============================================================================

#[tokio::test]
async fn zero_days_yields_empty_report() {
    let processor = RateProcessor::new(StaticSource {
        body: well_formed_body(),
    });

    let reports = processor.rates_for_days(0, &["EUR", "USD"]).await.unwrap();
    assert!(reports.is_empty());
}

#[tokio::test]
async fn one_report_per_successful_day_in_descending_order() {
    let processor = RateProcessor::new(StaticSource {
        body: well_formed_body(),
    });

    let reports = processor.rates_for_days(3, &["EUR", "USD"]).await.unwrap();
    assert_eq!(reports.len(), 3);

    for (offset, report) in reports.iter().enumerate() {
        let date = date_key(offset as u32);
        let record = report.get(&date).expect("report keyed by its date");
        assert_eq!(record.len(), 2);
    }
}

#[tokio::test]
async fn failed_days_are_skipped_not_fatal() {
    let processor = RateProcessor::new(FailingSource { status: 500 });

    let reports = processor.rates_for_days(5, &["EUR", "USD"]).await.unwrap();
    assert!(reports.is_empty());
}

#[tokio::test]
async fn partial_failure_keeps_the_good_day() {
    // days=2, today responds with EUR only, yesterday returns HTTP 500
    let today = date_key(0);
    let processor = RateProcessor::new(SingleDaySource {
        ok_date: today.clone(),
        body: json!({
            "exchangeRate": [
                {"currency": "EUR", "saleRate": 40.1, "purchaseRate": 39.9},
            ]
        }),
    });

    let reports = processor.rates_for_days(2, &["EUR", "USD"]).await.unwrap();
    assert_eq!(reports.len(), 1);

    let record = &reports[0][&today];
    assert_eq!(record.len(), 1);
    assert_eq!(record["EUR"].sale, 40.1);
    assert_eq!(record["EUR"].purchase, 39.9);
}

#[tokio::test]
async fn malformed_body_aborts_the_run() {
    let processor = RateProcessor::new(StaticSource {
        body: json!({"bank": "PB"}),
    });

    let err = processor
        .rates_for_days(1, &["EUR"])
        .await
        .expect_err("missing exchangeRate must propagate");
    assert!(err.to_string().contains("exchangeRate"));
}

#[tokio::test]
async fn report_serializes_with_expected_shape() {
    let today = date_key(0);
    let processor = RateProcessor::new(StaticSource {
        body: well_formed_body(),
    });

    let reports = processor.rates_for_days(1, &["EUR", "USD"]).await.unwrap();
    let rendered = serde_json::to_value(&reports).unwrap();

    assert_eq!(
        rendered,
        json!([
            {
                (today.clone()): {
                    "EUR": {"sale": 40.1, "purchase": 39.9},
                    "USD": {"sale": 37.5, "purchase": 37.0},
                }
            }
        ])
    );
}
