// Plain-text report — summary header followed by every ranked pair.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::Result;

use super::{result_line, summary_fields};
use crate::pipeline::check::SimilarityReport;

/// Render the report as text. Separate from writing so it can be tested.
pub fn render(report: &SimilarityReport) -> String {
    let mut out = String::new();
    out.push_str("=== Document Similarity Report ===\n\n");
    let _ = writeln!(
        out,
        "Generated         : {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(out, "Mode              : {}", report.mode.description());
    for (label, value) in summary_fields(&report.summary) {
        let _ = writeln!(out, "{label:<18}: {value}");
    }

    if !report.warnings.is_empty() {
        out.push_str("\n=== Skipped Files ===\n\n");
        for warning in &report.warnings {
            let _ = writeln!(out, "{warning}");
        }
    }

    out.push_str("\n=== Sorted Results ===\n\n");
    for result in &report.results {
        out.push_str(&result_line(result));
        out.push('\n');
    }
    out
}

pub fn write_report(report: &SimilarityReport, path: &Path) -> Result<()> {
    fs::write(path, render(report))?;
    Ok(())
}
