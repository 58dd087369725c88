//! Per-ticker forward-P/E aggregation and per-list orchestration.
//!
//! One ticker is fully processed before the next begins: the supplementary
//! info call, then each of the four sources in a fixed order with the
//! configured delay after every call. Failures never abort the run; they
//! shrink the averaging sample or, for a whole-ticker failure, produce an
//! all-sentinel row.

use chrono::Utc;
use tracing::{info, warn};

use crate::api::{
    ForwardPeSource, GoogleFinanceScraper, MarketWatchScraper, MoomooScraper, RequestPacer,
    YahooClient,
};
use crate::models::{Config, PeRow, TickerInfo};

/// Round to two decimal places, the precision the output table carries.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Arithmetic mean of the collected readings, rounded to two decimals.
/// Absent (not zero) when no source produced a reading.
fn mean_forward_pe(readings: &[f64]) -> Option<f64> {
    if readings.is_empty() {
        return None;
    }
    Some(round2(readings.iter().sum::<f64>() / readings.len() as f64))
}

/// Multi-source forward-P/E collector.
pub struct PeCollector {
    yahoo: YahooClient,
    sources: Vec<Box<dyn ForwardPeSource>>,
    pacer: RequestPacer,
}

impl PeCollector {
    /// Collector with the standard four sources in their fixed order:
    /// Yahoo, Google Finance, MarketWatch, Moomoo.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = crate::api::build_http_client(config.http_timeout_secs)?;
        let yahoo = YahooClient::new(client.clone());

        let sources: Vec<Box<dyn ForwardPeSource>> = vec![
            Box::new(yahoo.clone()),
            Box::new(GoogleFinanceScraper::new(client.clone())),
            Box::new(MarketWatchScraper::new(client.clone())),
            Box::new(MoomooScraper::new(client)),
        ];

        Ok(Self {
            yahoo,
            sources,
            pacer: RequestPacer::new(config.request_delay_ms),
        })
    }

    /// Collector over caller-supplied sources. Used by tests to point the
    /// sweep at mock servers without the fixed delay.
    pub fn with_sources(
        yahoo: YahooClient,
        sources: Vec<Box<dyn ForwardPeSource>>,
        delay_ms: u64,
    ) -> Self {
        Self {
            yahoo,
            sources,
            pacer: RequestPacer::new(delay_ms),
        }
    }

    /// Sweep every source for one ticker and average the readings.
    ///
    /// Source order is fixed but only governs the log lines; the mean is
    /// order-independent. Each call is followed by the pacing delay whether
    /// it succeeded or not.
    pub async fn average_forward_pe(&self, ticker: &str) -> Option<f64> {
        let mut readings = Vec::with_capacity(self.sources.len());

        for source in &self.sources {
            match source.forward_pe(ticker).await {
                Ok(value) => {
                    info!("Got {} forward PE for {}: {}", source.name(), ticker, value);
                    readings.push(value);
                }
                Err(e) => {
                    warn!("{} error for {}: {}", source.name(), ticker, e);
                }
            }
            // Be polite between requests
            self.pacer.wait().await;
        }

        mean_forward_pe(&readings)
    }

    /// Build one output row per input ticker, in input order.
    ///
    /// Duplicates are preserved; a ticker that fails entirely still yields
    /// a row (all sentinels) so the run completes for every request.
    pub async fn collect(&self, tickers: &[String]) -> Vec<PeRow> {
        let mut rows = Vec::with_capacity(tickers.len());

        for ticker in tickers {
            info!("📈 Processing {}", ticker);
            rows.push(self.collect_one(ticker).await);
        }

        rows
    }

    async fn collect_one(&self, ticker: &str) -> PeRow {
        let today = Utc::now().date_naive();

        // A failed info call only blanks the descriptive fields; the
        // scrapers still feed the average.
        let info = match self.yahoo.ticker_info(ticker).await {
            Ok(info) => info,
            Err(e) => {
                warn!("Yahoo info error for {}: {}", ticker, e);
                TickerInfo::default()
            }
        };

        let average_forward_pe = self.average_forward_pe(ticker).await;

        PeRow {
            ticker: ticker.to_string(),
            company_name: info.short_name,
            sector: info.sector,
            industry: info.industry,
            price: info.price,
            current_pe: info.trailing_pe,
            yahoo_forward_pe: info.forward_pe,
            average_forward_pe,
            date_recorded: today,
        }
    }
}
