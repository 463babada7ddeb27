// PDF text extraction, one page at a time.
//
// Pages are visited in page-number order. A page that yields no text (scanned
// images, missing fonts, odd encodings) contributes an empty string; only a
// document that can't be parsed at all is an error. No OCR.

use anyhow::{Context, Result};
use lopdf::Document;
use tracing::debug;

use super::traits::TextExtractor;

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let doc = Document::load_mem(bytes).context("Failed to parse PDF")?;

        let mut text = String::new();
        // get_pages() is a BTreeMap keyed by page number, so this is page order
        for page_number in doc.get_pages().keys() {
            match doc.extract_text(&[*page_number]) {
                Ok(page_text) => text.push_str(&page_text),
                Err(e) => {
                    debug!(page = page_number, error = %e, "No extractable text on page");
                }
            }
        }

        Ok(text)
    }
}
