// Spreadsheet report — same columns as the CSV, on a single worksheet.

use std::path::Path;

use anyhow::Result;
use rust_xlsxwriter::{Format, Workbook};

use super::{table_row, TABLE_HEADERS};
use crate::pipeline::check::SimilarityReport;

const SHEET_NAME: &str = "Similarity Report";

pub fn write_report(report: &SimilarityReport, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, title) in TABLE_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header)?;
    }

    for (i, result) in report.results.iter().enumerate() {
        let row = (i + 1) as u32;
        for (col, cell) in table_row(result).iter().enumerate() {
            sheet.write_string(row, col as u16, cell.as_str())?;
        }
    }

    workbook.save(path)?;
    Ok(())
}
