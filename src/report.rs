//! Rendering of benchmark reports.
//!
//! The table format prints one row per table representation with a leading
//! row index, right-aligned like a data frame printout.

use serde::{Deserialize, Serialize};

use crate::benchmark::BenchReport;
use crate::error::BenchError;

/// Output format for benchmark reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Aligned text table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

const HEADERS: [&str; 4] = [
    "LUT Type",
    "Throughput (pixels/sec)",
    "Time (s)",
    "Mismatches",
];

/// Render a report in the requested format
pub fn render(report: &BenchReport, format: ReportFormat) -> Result<String, BenchError> {
    match format {
        ReportFormat::Table => Ok(render_table(report)),
        ReportFormat::Json => render_json(report),
    }
}

/// Render a report as an aligned text table
pub fn render_table(report: &BenchReport) -> String {
    let rows: Vec<[String; 5]> = report
        .results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            [
                i.to_string(),
                r.label.clone(),
                format!("{:.2}", r.throughput),
                format!("{:.6}", r.elapsed_secs),
                r.mismatches.to_string(),
            ]
        })
        .collect();

    let mut widths = [0usize; 5];
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }
    for (w, header) in widths[1..].iter_mut().zip(HEADERS) {
        *w = (*w).max(header.len());
    }

    let mut out = String::new();
    out.push_str(&" ".repeat(widths[0]));
    for (w, header) in widths[1..].iter().zip(HEADERS) {
        out.push_str(&format!("  {:>w$}", header, w = *w));
    }
    out.push('\n');

    for row in &rows {
        out.push_str(&format!("{:<w$}", row[0], w = widths[0]));
        for (w, cell) in widths[1..].iter().zip(&row[1..]) {
            out.push_str(&format!("  {:>w$}", cell, w = *w));
        }
        out.push('\n');
    }

    out
}

/// Render a report as pretty-printed JSON
pub fn render_json(report: &BenchReport) -> Result<String, BenchError> {
    Ok(serde_json::to_string_pretty(report)?)
}
