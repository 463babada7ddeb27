// Output formatting — terminal display, report files and the side-by-side view.

pub mod csv;
pub mod json;
pub mod pdf;
pub mod side_by_side;
pub mod terminal;
pub mod text;
pub mod xlsx;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::info;

use crate::pipeline::check::SimilarityReport;
use crate::scoring::summary::SummaryStats;
use crate::similarity::ranking::PairResult;

/// File stem shared by every report format.
pub const REPORT_STEM: &str = "similarity_report";

/// Column headers for the tabular formats (CSV, XLSX).
pub const TABLE_HEADERS: [&str; 4] = ["File 1", "File 2", "Similarity (%)", "Risk Level"];

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..120]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like emoji or accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Format a percent score with two decimals, e.g. `87.50%`.
pub fn format_percent(score: f64) -> String {
    format!("{score:.2}%")
}

/// One table row: file, file, formatted score, risk label.
pub fn table_row(result: &PairResult) -> [String; 4] {
    [
        result.doc_a.clone(),
        result.doc_b.clone(),
        format_percent(result.score),
        result.risk.to_string(),
    ]
}

/// `a <--> b = 87.50%`
pub fn pair_label(result: &PairResult) -> String {
    format!(
        "{} <--> {} = {}",
        result.doc_a,
        result.doc_b,
        format_percent(result.score)
    )
}

/// `a <--> b : 87.50%  [HIGH RISK]`
pub fn result_line(result: &PairResult) -> String {
    format!(
        "{} <--> {} : {}  [{}]",
        result.doc_a,
        result.doc_b,
        format_percent(result.score),
        result.risk
    )
}

/// The summary block as (label, value) pairs, in display order.
pub fn summary_fields(summary: &SummaryStats) -> Vec<(&'static str, String)> {
    vec![
        ("Total Documents", summary.total_documents.to_string()),
        ("Total Comparisons", summary.total_comparisons.to_string()),
        ("Highest Similarity", pair_label(&summary.highest)),
        ("Lowest Similarity", pair_label(&summary.lowest)),
        ("Average Similarity", format_percent(summary.average)),
    ]
}

/// Report file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Text,
    Xlsx,
    Pdf,
    Json,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 5] = [
        ReportFormat::Csv,
        ReportFormat::Text,
        ReportFormat::Xlsx,
        ReportFormat::Pdf,
        ReportFormat::Json,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Text => "txt",
            ReportFormat::Xlsx => "xlsx",
            ReportFormat::Pdf => "pdf",
            ReportFormat::Json => "json",
        }
    }

    /// Write the report in this format to `path`.
    pub fn write(&self, report: &SimilarityReport, path: &Path) -> Result<()> {
        match self {
            ReportFormat::Csv => csv::write_report(report, path),
            ReportFormat::Text => text::write_report(report, path),
            ReportFormat::Xlsx => xlsx::write_report(report, path),
            ReportFormat::Pdf => pdf::write_report(report, path),
            ReportFormat::Json => json::write_report(report, path),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "txt" | "text" => Ok(ReportFormat::Text),
            "xlsx" | "excel" => Ok(ReportFormat::Xlsx),
            "pdf" => Ok(ReportFormat::Pdf),
            "json" => Ok(ReportFormat::Json),
            other => anyhow::bail!("Unknown report format '{other}'"),
        }
    }
}

/// Write the report in each requested format under `dir`.
///
/// Creates `dir` if needed. Returns the written paths in the order given.
pub fn write_reports(
    report: &SimilarityReport,
    dir: &Path,
    formats: &[ReportFormat],
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create reports folder {}", dir.display()))?;

    let mut written = Vec::with_capacity(formats.len());
    for format in formats {
        let path = dir.join(format!("{REPORT_STEM}.{}", format.extension()));
        format
            .write(report, &path)
            .with_context(|| format!("Failed to write {format} report"))?;
        info!(path = %path.display(), "Report written");
        written.push(path);
    }
    Ok(written)
}
