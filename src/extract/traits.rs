// Text extractor trait — one implementation per supported file format.
//
// Only the PDF and DOCX implementations touch a document-format library; the
// scoring core never sees anything but the resulting strings.

use anyhow::Result;

/// Turns raw document bytes into a UTF-8 string.
pub trait TextExtractor {
    /// Short format name used in logs
    fn name(&self) -> &'static str;

    /// Extract the document's text. An empty string is a valid result.
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}
