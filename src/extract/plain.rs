// Plain-text extraction — lossy UTF-8 decoding.

use anyhow::Result;

use super::traits::TextExtractor;

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn name(&self) -> &'static str {
        "txt"
    }

    /// Invalid byte sequences become U+FFFD instead of failing the document.
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}
