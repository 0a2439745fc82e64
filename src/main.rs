//! Exchange rate report - main entry point
//!
//! Fetches rates for the last N days and prints the report as pretty JSON
//! on stdout. Diagnostics go to stderr so the output stays pipeable.

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use exchange_rates::{config, Config, RateFetcher, RateProcessor};

#[derive(Parser, Debug)]
#[command(name = "exchange-rates")]
#[command(about = "Report historical currency exchange rates from PrivatBank", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of past days to fetch, today included.
    /// Missing or non-numeric input falls back to 1.
    days: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Lenient day-count parse: anything that is not a non-negative integer
/// means one day
fn parse_days(arg: Option<&str>) -> u32 {
    arg.and_then(|s| s.parse().ok())
        .unwrap_or(config::DEFAULT_DAYS)
}

fn setup_logging(verbose: bool) {
    // Filter out noisy external crates
    let level = if verbose { "debug" } else { "info" };
    let filter_str = format!(
        "{},hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn,h2=warn",
        level
    );
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    // stderr only: stdout is reserved for the JSON report
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let days = parse_days(cli.days.as_deref());
    debug!("requested {} days", days);

    let config = Config::from_env();
    let currencies: Vec<&str> = config.currencies.iter().map(String::as_str).collect();

    let fetcher = RateFetcher::new(config.base_url.clone());
    let processor = RateProcessor::new(fetcher);

    let reports = processor.rates_for_days(days, &currencies).await?;
    println!("{}", serde_json::to_string_pretty(&reports)?);

    Ok(())
}
