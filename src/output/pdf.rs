// Printable PDF report — A4 pages with a summary block and capped detail rows.
//
// Only the first MAX_DETAIL_ROWS pairs are printed; if more exist a truncation
// notice follows. Text uses the standard Helvetica fonts with WinAnsi
// encoding, so characters outside Latin-1 are printed as '?'.

use std::path::Path;

use anyhow::{Context, Result};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};

use super::{result_line, summary_fields};
use crate::pipeline::check::SimilarityReport;

pub const MAX_DETAIL_ROWS: usize = 80;
pub const TRUNCATION_NOTICE: &str = "... (truncated additional rows)";

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN_X: f32 = 40.0;
const TOP_Y: f32 = PAGE_HEIGHT - 50.0;
const BOTTOM_Y: f32 = 60.0;

const REGULAR: &str = "F1";
const BOLD: &str = "F2";

/// Accumulates drawing operations page by page.
struct PageWriter {
    finished: Vec<Vec<Operation>>,
    current: Vec<Operation>,
    y: f32,
}

impl PageWriter {
    fn new() -> Self {
        Self {
            finished: Vec::new(),
            current: Vec::new(),
            y: TOP_Y,
        }
    }

    fn line(&mut self, font: &str, size: f32, text: &str, advance: f32) {
        if self.y < BOTTOM_Y {
            self.finished.push(std::mem::take(&mut self.current));
            self.y = TOP_Y;
        }
        let ops = &mut self.current;
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![Object::Name(font.as_bytes().to_vec()), size.into()],
        ));
        ops.push(Operation::new("Td", vec![MARGIN_X.into(), self.y.into()]));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        ));
        ops.push(Operation::new("ET", vec![]));
        self.y -= advance;
    }

    fn into_pages(mut self) -> Vec<Vec<Operation>> {
        self.finished.push(self.current);
        self.finished
    }
}

/// Map text to single-byte WinAnsi, replacing anything outside Latin-1.
fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u32::from(c) {
            code @ 0x20..=0x7e | code @ 0xa0..=0xff => code as u8,
            _ => b'?',
        })
        .collect()
}

/// Lay out the report as a list of pages of drawing operations.
fn layout(report: &SimilarityReport) -> Vec<Vec<Operation>> {
    let mut w = PageWriter::new();

    w.line(BOLD, 16.0, "Document Similarity Report", 30.0);
    for (label, value) in summary_fields(&report.summary) {
        w.line(REGULAR, 11.0, &format!("{label:<18}: {value}"), 15.0);
    }
    w.line(
        REGULAR,
        11.0,
        &format!("Plagiarism Status : {}", report.top_badge()),
        25.0,
    );

    w.line(BOLD, 12.0, "Sorted Results:", 20.0);
    for result in report.results.iter().take(MAX_DETAIL_ROWS) {
        w.line(REGULAR, 10.0, &result_line(result), 12.0);
    }
    if report.results.len() > MAX_DETAIL_ROWS {
        w.line(REGULAR, 10.0, TRUNCATION_NOTICE, 12.0);
    }

    w.into_pages()
}

/// Build the PDF document in memory.
pub fn build_document(report: &SimilarityReport) -> Result<Document> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            REGULAR => regular_id,
            BOLD => bold_id,
        },
    });

    let mut kids: Vec<ObjectId> = Vec::new();
    for operations in layout(report) {
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            lopdf::Dictionary::new(),
            content.encode().context("Failed to encode PDF page content")?,
        ));
        kids.push(doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        }));
    }

    let page_count = kids.len() as i64;
    let kids: Vec<Object> = kids.into_iter().map(Object::Reference).collect();
    let media_box: Vec<Object> = vec![
        Object::Integer(0),
        Object::Integer(0),
        PAGE_WIDTH.into(),
        PAGE_HEIGHT.into(),
    ];
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "MediaBox" => media_box,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    Ok(doc)
}

pub fn write_report(report: &SimilarityReport, path: &Path) -> Result<()> {
    let mut doc = build_document(report)?;
    doc.save(path)
        .with_context(|| format!("Failed to save PDF to {}", path.display()))?;
    Ok(())
}
