use std::time::Duration;

use crate::models::SourceError;

pub mod scrapers;
pub mod yahoo_client;

pub use scrapers::{GoogleFinanceScraper, MarketWatchScraper, MoomooScraper};
pub use yahoo_client::YahooClient;

/// Desktop-browser User-Agent sent with every scraper request.
///
/// The pages served to an unidentified HTTP client differ from the ones the
/// April 2025 selectors were written against.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Fixed-delay pacer between outbound requests.
///
/// The only rate control in the system: one sleep after every source call,
/// no token bucket, no backoff.
pub struct RequestPacer {
    delay: Duration,
}

impl RequestPacer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }

    pub async fn wait(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

/// Capability shared by all four forward-P/E sources: given a ticker,
/// produce one reading or a local error.
#[async_trait::async_trait]
pub trait ForwardPeSource: Send + Sync {
    /// Short source name used in log lines.
    fn name(&self) -> &'static str;

    async fn forward_pe(&self, ticker: &str) -> Result<f64, SourceError>;
}

/// Shared HTTP client with the browser User-Agent and a request timeout.
pub fn build_http_client(timeout_secs: u64) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(BROWSER_USER_AGENT)
        .build()
}
