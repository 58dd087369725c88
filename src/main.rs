use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use forward_pe::collector::PeCollector;
use forward_pe::models::Config;
use forward_pe::output;
use forward_pe::utils::parse_tickers;

/// Multi-source forward P/E aggregator.
///
/// Queries Yahoo Finance plus the Google Finance, MarketWatch and Moomoo
/// quote pages for each ticker, averages the forward P/E readings and
/// writes a summary table to the console and a CSV file.
#[derive(Parser, Debug)]
#[command(name = "forward-pe", version, about)]
struct Args {
    /// Comma-separated ticker list; omit to be prompted on stdin
    #[arg(long)]
    tickers: Option<String>,

    /// Output CSV path (overrides FORWARD_PE_OUTPUT_PATH)
    #[arg(long)]
    output: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("forward_pe=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(output) = args.output {
        config.output_path = output;
    }

    let raw = match args.tickers {
        Some(list) => list,
        None => prompt_for_tickers(config.max_tickers)?,
    };

    let tickers = parse_tickers(&raw, config.max_tickers);
    if tickers.is_empty() {
        println!("No tickers entered, nothing to do.");
        return Ok(());
    }

    info!("📊 Collecting forward P/E data for {} tickers", tickers.len());

    let collector = PeCollector::new(&config)?;
    let rows = collector.collect(&tickers).await;

    println!("\nComprehensive P/E Analysis:");
    let mut stdout = io::stdout().lock();
    output::write_table(&mut stdout, &rows)?;
    drop(stdout);

    output::write_csv(Path::new(&config.output_path), &rows)?;
    println!("\nResults saved to {}", config.output_path);

    Ok(())
}

/// Prompt for the ticker list on stdin and read one line.
fn prompt_for_tickers(max: usize) -> Result<String> {
    print!("Enter stock tickers (comma-separated, max {}): ", max);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input)
}
