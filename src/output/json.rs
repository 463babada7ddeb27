// JSON report — the whole SimilarityReport, for scripts and other tools.

use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::pipeline::check::SimilarityReport;

pub fn write_report(report: &SimilarityReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}
