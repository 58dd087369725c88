use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel rendered for any field that could not be retrieved.
///
/// Distinguishes "unavailable" from a legitimate zero or empty value in both
/// the console table and the CSV export.
pub const NOT_AVAILABLE: &str = "N/A";

/// Failure of a single forward-P/E source lookup.
///
/// Never fatal: the collector logs the error and records the reading as
/// absent, shrinking the averaging sample.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),
    #[error("page element not found: {0}")]
    MissingValue(String),
    #[error("could not parse value {0:?} as a number")]
    ParseValue(String),
}

/// Descriptive fields pulled from the structured Yahoo Finance client.
///
/// Every field is optional; a field the API omits shows up as the sentinel
/// in the output rather than failing the row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickerInfo {
    pub short_name: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub price: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub forward_pe: Option<f64>,
}

/// One output row of the P/E analysis table.
///
/// Built once per input ticker and appended in input order, never mutated
/// afterward.
#[derive(Debug, Clone)]
pub struct PeRow {
    pub ticker: String,
    pub company_name: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub price: Option<f64>,
    pub current_pe: Option<f64>,
    pub yahoo_forward_pe: Option<f64>,
    pub average_forward_pe: Option<f64>,
    pub date_recorded: NaiveDate,
}

impl PeRow {
    /// Row with every field absent, used when a ticker fails entirely.
    pub fn sentinel(ticker: &str, date_recorded: NaiveDate) -> Self {
        Self {
            ticker: ticker.to_string(),
            company_name: None,
            sector: None,
            industry: None,
            price: None,
            current_pe: None,
            yahoo_forward_pe: None,
            average_forward_pe: None,
            date_recorded,
        }
    }
}

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub request_delay_ms: u64,
    pub http_timeout_secs: u64,
    pub max_tickers: usize,
    pub output_path: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Ok(Config {
            request_delay_ms: std::env::var("FORWARD_PE_REQUEST_DELAY_MS")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .unwrap_or(1000),
            http_timeout_secs: std::env::var("FORWARD_PE_HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
            max_tickers: std::env::var("FORWARD_PE_MAX_TICKERS")
                .unwrap_or_else(|_| "150".to_string())
                .parse()
                .unwrap_or(150),
            output_path: std::env::var("FORWARD_PE_OUTPUT_PATH")
                .unwrap_or_else(|_| "comprehensive_pe_analysis.csv".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request_delay_ms: 1000,
            http_timeout_secs: 30,
            max_tickers: 150,
            output_path: "comprehensive_pe_analysis.csv".to_string(),
        }
    }
}
