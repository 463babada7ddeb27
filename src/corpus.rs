// Corpus data model — the documents that take part in a similarity run.
//
// A Document is created once at load time and never mutated. Corpus order is
// the comparison index basis: pair (i, j) always refers to positions in the
// order documents were admitted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single loaded document with its extracted text.
#[derive(Debug, Clone)]
pub struct Document {
    /// File name or upload label
    pub id: String,
    /// The raw bytes as read from disk or upload
    pub raw: Vec<u8>,
    /// Extracted text, guaranteed non-blank once admitted to a Corpus
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, raw: Vec<u8>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            raw,
            text: text.into(),
        }
    }

    /// Character count of the extracted text (not bytes).
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// An ordered set of documents with non-blank text.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a document if its text has any non-whitespace content.
    ///
    /// Returns false (and drops the document) when the text is blank.
    pub fn push(&mut self, document: Document) -> bool {
        if document.text.trim().is_empty() {
            return false;
        }
        self.documents.push(document);
        true
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn ids(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.id.clone()).collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.text.clone()).collect()
    }
}

/// Why a document was left out of the corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The file extension isn't one we can extract from
    Unsupported { extension: String },
    /// Extraction worked but produced only whitespace
    Empty,
    /// The file couldn't be read or parsed
    Unreadable { error: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unsupported { extension } if extension.is_empty() => {
                write!(f, "unsupported file type (no extension)")
            }
            SkipReason::Unsupported { extension } => {
                write!(f, "unsupported file type (.{extension})")
            }
            SkipReason::Empty => write!(f, "empty after extraction"),
            SkipReason::Unreadable { error } => write!(f, "could not be processed: {error}"),
        }
    }
}

/// A non-fatal warning for a single document that was skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkipWarning {
    pub id: String,
    pub reason: SkipReason,
}

impl fmt::Display for SkipWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.reason)
    }
}
