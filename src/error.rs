// Input errors that halt a similarity run.
//
// Per-document problems never show up here: the loader turns those into
// skip warnings and keeps going. These variants are the conditions where the
// pipeline genuinely has nothing to work with.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Submissions folder not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("No valid TXT/PDF/DOCX files with text found in {}", .0.display())]
    NoDocuments(PathBuf),

    #[error("No valid documents with text were provided")]
    NoDocumentsProvided,

    #[error("Need at least two valid documents to compare, found {found}")]
    InsufficientDocuments { found: usize },
}
