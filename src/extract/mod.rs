// Text extraction — file type dispatch and per-format extractors.
//
// The file extension decides the DocumentKind; each supported kind maps to a
// TextExtractor. Unsupported kinds never reach an extractor.

pub mod docx;
pub mod pdf;
pub mod plain;
pub mod traits;

use std::path::Path;

use anyhow::Result;

use self::docx::DocxExtractor;
use self::pdf::PdfExtractor;
use self::plain::PlainTextExtractor;
use self::traits::TextExtractor;

/// The document formats we know how to read, decided by file extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Pdf,
    WordProcessor,
    /// Anything else; carries the lowercased extension (empty if none)
    Unsupported(String),
}

impl DocumentKind {
    /// Classify a file name by its extension, case-insensitively.
    pub fn from_name(name: &str) -> Self {
        let extension = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "txt" => DocumentKind::PlainText,
            "pdf" => DocumentKind::Pdf,
            "docx" => DocumentKind::WordProcessor,
            _ => DocumentKind::Unsupported(extension),
        }
    }

    /// The extractor for this kind, or None when unsupported.
    pub fn extractor(&self) -> Option<&'static dyn TextExtractor> {
        match self {
            DocumentKind::PlainText => Some(&PlainTextExtractor),
            DocumentKind::Pdf => Some(&PdfExtractor),
            DocumentKind::WordProcessor => Some(&DocxExtractor),
            DocumentKind::Unsupported(_) => None,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, DocumentKind::Unsupported(_))
    }
}

/// Extract text from an in-memory document.
///
/// Returns Ok(None) for unsupported kinds so callers can tell "skip" from
/// "failed to read".
pub fn extract_text(kind: &DocumentKind, bytes: &[u8]) -> Result<Option<String>> {
    match kind.extractor() {
        Some(extractor) => extractor.extract(bytes).map(Some),
        None => Ok(None),
    }
}
