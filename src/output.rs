//! Console table rendering and CSV export for the P/E analysis rows.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{PeRow, NOT_AVAILABLE};

/// Fixed column order shared by the console table and the CSV file.
pub const COLUMNS: [&str; 9] = [
    "Ticker",
    "Company Name",
    "Sector",
    "Industry",
    "Price",
    "Current PE",
    "Yahoo Forward PE",
    "Average Forward PE",
    "Date Recorded",
];

fn text_or_na(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn number_or_na(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// One row rendered to its nine cells, sentinels substituted.
fn render_cells(row: &PeRow) -> [String; 9] {
    [
        row.ticker.clone(),
        text_or_na(&row.company_name),
        text_or_na(&row.sector),
        text_or_na(&row.industry),
        number_or_na(row.price),
        number_or_na(row.current_pe),
        number_or_na(row.yahoo_forward_pe),
        number_or_na(row.average_forward_pe),
        row.date_recorded.format("%Y-%m-%d").to_string(),
    ]
}

/// Print the analysis table to the given writer with fixed-width columns.
pub fn write_table(out: &mut impl Write, rows: &[PeRow]) -> Result<()> {
    let rendered: Vec<[String; 9]> = rows.iter().map(render_cells).collect();

    // Column widths fit the widest cell, header included.
    let mut widths: Vec<usize> = COLUMNS.iter().map(|c| c.len()).collect();
    for cells in &rendered {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let header: Vec<String> = COLUMNS
        .iter()
        .zip(&widths)
        .map(|(name, width)| format!("{:<width$}", name, width = *width))
        .collect();
    writeln!(out, "{}", header.join("  ").trim_end())?;

    for cells in &rendered {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        writeln!(out, "{}", line.join("  ").trim_end())?;
    }

    Ok(())
}

/// Write the rows to a CSV file, header first, no index column.
pub fn write_csv(path: &Path, rows: &[PeRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(COLUMNS)?;
    for row in rows {
        writer.write_record(render_cells(row))?;
    }
    writer.flush()?;

    Ok(())
}
