//! Aggregation behavior over stub sources: averaging, rounding, absence,
//! row ordering and duplicates.

use pretty_assertions::assert_eq;
use test_log::test;

use forward_pe::api::ForwardPeSource;
use forward_pe::collector::PeCollector;

use crate::common::{unreachable_yahoo_client, FixedSource};

fn collector_with(sources: Vec<Box<dyn ForwardPeSource>>) -> PeCollector {
    PeCollector::with_sources(unreachable_yahoo_client(), sources, 0)
}

#[test(tokio::test)]
async fn test_average_of_three_sources() {
    let collector = collector_with(vec![
        Box::new(FixedSource::ok("Yahoo", 18.0)),
        Box::new(FixedSource::ok("Google", 20.0)),
        Box::new(FixedSource::ok("MarketWatch", 22.0)),
        Box::new(FixedSource::failing("Moomoo")),
    ]);

    assert_eq!(collector.average_forward_pe("AAPL").await, Some(20.0));
}

#[test(tokio::test)]
async fn test_average_rounds_to_two_decimals() {
    let collector = collector_with(vec![
        Box::new(FixedSource::ok("Yahoo", 18.0)),
        Box::new(FixedSource::ok("Google", 21.3)),
    ]);

    assert_eq!(collector.average_forward_pe("AAPL").await, Some(19.65));
}

#[test(tokio::test)]
async fn test_all_sources_failing_yields_absent_not_zero() {
    let collector = collector_with(vec![
        Box::new(FixedSource::failing("Yahoo")),
        Box::new(FixedSource::failing("Google")),
        Box::new(FixedSource::failing("MarketWatch")),
        Box::new(FixedSource::failing("Moomoo")),
    ]);

    assert_eq!(collector.average_forward_pe("AAPL").await, None);
}

#[test(tokio::test)]
async fn test_one_row_per_ticker_in_input_order() {
    let collector = collector_with(vec![Box::new(FixedSource::ok("Google", 20.0))]);

    let tickers: Vec<String> = ["MSFT", "AAPL", "GOOG"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let rows = collector.collect(&tickers).await;

    assert_eq!(rows.len(), 3);
    let order: Vec<&str> = rows.iter().map(|r| r.ticker.as_str()).collect();
    assert_eq!(order, vec!["MSFT", "AAPL", "GOOG"]);
}

#[test(tokio::test)]
async fn test_duplicate_tickers_produce_duplicate_rows() {
    let collector = collector_with(vec![Box::new(FixedSource::ok("Google", 20.0))]);

    let tickers = vec!["AAPL".to_string(), "AAPL".to_string()];
    let rows = collector.collect(&tickers).await;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].ticker, "AAPL");
    assert_eq!(rows[1].ticker, "AAPL");
    assert_eq!(rows[0].average_forward_pe, rows[1].average_forward_pe);
}

#[test(tokio::test)]
async fn test_info_failure_still_averages_from_scrapers() {
    // The stub Yahoo client can never answer the info call; the scraper
    // stubs still feed the average.
    let collector = collector_with(vec![
        Box::new(FixedSource::ok("Google", 18.0)),
        Box::new(FixedSource::ok("MarketWatch", 21.3)),
    ]);

    let rows = collector.collect(&["AAPL".to_string()]).await;

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.company_name, None);
    assert_eq!(row.sector, None);
    assert_eq!(row.price, None);
    assert_eq!(row.current_pe, None);
    assert_eq!(row.yahoo_forward_pe, None);
    assert_eq!(row.average_forward_pe, Some(19.65));
}
