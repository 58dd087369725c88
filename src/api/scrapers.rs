//! Forward-P/E page scrapers for Google Finance, MarketWatch and Moomoo.
//!
//! Each scraper fetches the quote page for a ticker with a browser
//! User-Agent, locates a label element in the markup and reads the numeric
//! value from a sibling or child element. The selectors match the page
//! structures as of April 2025 and fail soft when the markup drifts: any
//! miss surfaces as a `SourceError` and the reading is skipped.

use reqwest::Client;
use scraper::{Element, ElementRef, Html, Selector};
use tracing::debug;

use crate::models::SourceError;

use super::ForwardPeSource;

const GOOGLE_BASE_URL: &str = "https://www.google.com";
const MARKETWATCH_BASE_URL: &str = "https://www.marketwatch.com";
const MOOMOO_BASE_URL: &str = "https://www.moomoo.com";

/// Parse a static selector known to be valid.
fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Collect and trim the text content of an element.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Parse the leading numeric token of a scraped value cell.
///
/// Cells sometimes carry a suffix after the number ("24.51 (forecast)"),
/// so only the first whitespace-separated token counts.
fn parse_pe_value(text: &str) -> Result<f64, SourceError> {
    let token = text
        .split_whitespace()
        .next()
        .ok_or_else(|| SourceError::ParseValue(text.to_string()))?;

    token
        .parse::<f64>()
        .map_err(|_| SourceError::ParseValue(text.to_string()))
}

/// Fetch a quote page and return its body.
async fn fetch_page(client: &Client, url: &str) -> Result<String, SourceError> {
    debug!("Fetching page: {}", url);

    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(SourceError::Status(response.status()));
    }

    Ok(response.text().await?)
}

/// Google Finance quote page scraper.
pub struct GoogleFinanceScraper {
    client: Client,
    base_url: String,
}

impl GoogleFinanceScraper {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, GOOGLE_BASE_URL)
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Google Finance structure as of April 2025: the stats grid holds
    /// `div.P6K39c` label cells, each followed by a sibling value div.
    fn extract(html: &str) -> Result<f64, SourceError> {
        let document = Html::parse_document(html);
        let label_cells = selector("div.P6K39c");

        let label = document
            .select(&label_cells)
            .find(|cell| element_text(*cell) == "P/E ratio")
            .ok_or_else(|| SourceError::MissingValue("P/E ratio label".to_string()))?;

        let value = label
            .next_sibling_element()
            .ok_or_else(|| SourceError::MissingValue("P/E ratio value cell".to_string()))?;

        parse_pe_value(&element_text(value))
    }
}

#[async_trait::async_trait]
impl ForwardPeSource for GoogleFinanceScraper {
    fn name(&self) -> &'static str {
        "Google"
    }

    async fn forward_pe(&self, ticker: &str) -> Result<f64, SourceError> {
        let url = format!("{}/finance/quote/{}:NASDAQ", self.base_url, ticker);
        let body = fetch_page(&self.client, &url).await?;
        Self::extract(&body)
    }
}

/// MarketWatch quote page scraper.
pub struct MarketWatchScraper {
    client: Client,
    base_url: String,
}

impl MarketWatchScraper {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, MARKETWATCH_BASE_URL)
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// MarketWatch structure as of April 2025: key-value list items
    /// (`li.kv__item`) with the label text and the value in a child span.
    fn extract(html: &str) -> Result<f64, SourceError> {
        let document = Html::parse_document(html);
        let items = selector("li.kv__item");
        let value_span = selector("span");

        let item = document
            .select(&items)
            .find(|item| element_text(*item).starts_with("Forward P/E"))
            .ok_or_else(|| SourceError::MissingValue("Forward P/E item".to_string()))?;

        let span = item
            .select(&value_span)
            .next()
            .ok_or_else(|| SourceError::MissingValue("Forward P/E value span".to_string()))?;

        parse_pe_value(&element_text(span))
    }
}

#[async_trait::async_trait]
impl ForwardPeSource for MarketWatchScraper {
    fn name(&self) -> &'static str {
        "MarketWatch"
    }

    async fn forward_pe(&self, ticker: &str) -> Result<f64, SourceError> {
        let url = format!("{}/investing/stock/{}", self.base_url, ticker);
        let body = fetch_page(&self.client, &url).await?;
        Self::extract(&body)
    }
}

/// Moomoo quote page scraper.
pub struct MoomooScraper {
    client: Client,
    base_url: String,
}

impl MoomooScraper {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, MOOMOO_BASE_URL)
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Moomoo structure as of April 2025: a "Valuation" heading div whose
    /// sibling section holds label/value div pairs.
    fn extract(html: &str) -> Result<f64, SourceError> {
        let document = Html::parse_document(html);
        let divs = selector("div");

        let heading = document
            .select(&divs)
            .find(|div| element_text(*div) == "Valuation")
            .ok_or_else(|| SourceError::MissingValue("Valuation section".to_string()))?;

        let section = heading
            .next_sibling_element()
            .ok_or_else(|| SourceError::MissingValue("Valuation section body".to_string()))?;

        let label = section
            .select(&divs)
            .find(|div| element_text(*div) == "Forward P/E")
            .ok_or_else(|| SourceError::MissingValue("Forward P/E label".to_string()))?;

        let value = label
            .next_sibling_element()
            .ok_or_else(|| SourceError::MissingValue("Forward P/E value cell".to_string()))?;

        parse_pe_value(&element_text(value))
    }
}

#[async_trait::async_trait]
impl ForwardPeSource for MoomooScraper {
    fn name(&self) -> &'static str {
        "Moomoo"
    }

    async fn forward_pe(&self, ticker: &str) -> Result<f64, SourceError> {
        let url = format!("{}/market/stock/{}-US", self.base_url, ticker);
        let body = fetch_page(&self.client, &url).await?;
        Self::extract(&body)
    }
}
