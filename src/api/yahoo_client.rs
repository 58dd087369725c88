use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::models::{SourceError, TickerInfo};

use super::ForwardPeSource;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

const QUOTE_SUMMARY_MODULES: &str =
    "price,assetProfile,summaryDetail,financialData,defaultKeyStatistics";

/// Structured Yahoo Finance client.
///
/// Reads the quoteSummary endpoint for both the supplementary row fields
/// (company name, sector, industry, price, trailing P/E) and the
/// single-source forward P/E reading.
#[derive(Clone)]
pub struct YahooClient {
    client: Client,
    base_url: String,
}

impl YahooClient {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different host. Used by tests against a mock
    /// server.
    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch the quoteSummary record for a ticker and return the first
    /// result object.
    async fn quote_summary(&self, ticker: &str) -> Result<Value, SourceError> {
        let url = format!(
            "{}/v10/finance/quoteSummary/{}?modules={}",
            self.base_url, ticker, QUOTE_SUMMARY_MODULES
        );

        debug!("Fetching quote summary: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Status(response.status()));
        }

        let json: Value = response.json().await?;

        json.pointer("/quoteSummary/result/0")
            .cloned()
            .ok_or_else(|| SourceError::MissingValue("quoteSummary.result[0]".to_string()))
    }

    /// Descriptive fields for the output row. Every field is optional; a
    /// module the API omits simply leaves its fields absent.
    pub async fn ticker_info(&self, ticker: &str) -> Result<TickerInfo, SourceError> {
        let summary = self.quote_summary(ticker).await?;

        Ok(TickerInfo {
            short_name: summary
                .pointer("/price/shortName")
                .and_then(Value::as_str)
                .map(str::to_string),
            sector: summary
                .pointer("/assetProfile/sector")
                .and_then(Value::as_str)
                .map(str::to_string),
            industry: summary
                .pointer("/assetProfile/industry")
                .and_then(Value::as_str)
                .map(str::to_string),
            price: summary
                .pointer("/financialData/currentPrice/raw")
                .and_then(Value::as_f64),
            trailing_pe: summary
                .pointer("/summaryDetail/trailingPE/raw")
                .and_then(Value::as_f64),
            forward_pe: extract_forward_pe(&summary),
        })
    }
}

/// Forward P/E lives in summaryDetail; older listings only carry it in
/// defaultKeyStatistics.
fn extract_forward_pe(summary: &Value) -> Option<f64> {
    summary
        .pointer("/summaryDetail/forwardPE/raw")
        .and_then(Value::as_f64)
        .or_else(|| {
            summary
                .pointer("/defaultKeyStatistics/forwardPE/raw")
                .and_then(Value::as_f64)
        })
}

#[async_trait::async_trait]
impl ForwardPeSource for YahooClient {
    fn name(&self) -> &'static str {
        "Yahoo"
    }

    async fn forward_pe(&self, ticker: &str) -> Result<f64, SourceError> {
        let summary = self.quote_summary(ticker).await?;
        extract_forward_pe(&summary)
            .ok_or_else(|| SourceError::MissingValue("forwardPE".to_string()))
    }
}
