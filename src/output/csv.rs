// CSV report — one row per pair, highest score first.

use std::path::Path;

use anyhow::Result;

use super::{table_row, TABLE_HEADERS};
use crate::pipeline::check::SimilarityReport;

pub fn write_report(report: &SimilarityReport, path: &Path) -> Result<()> {
    let mut writer = ::csv::Writer::from_path(path)?;
    writer.write_record(TABLE_HEADERS)?;
    for result in &report.results {
        writer.write_record(table_row(result))?;
    }
    writer.flush()?;
    Ok(())
}
