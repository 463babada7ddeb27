// Corpus loading — read documents, extract text, skip what can't be used.
//
// One bad file never aborts the run: unsupported extensions, unreadable or
// corrupt files, and files that extract to blank text each become a
// SkipWarning and the loader moves on. Only a missing input directory is an
// error here; whether enough documents survived is the caller's decision.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::corpus::{Corpus, Document, SkipReason, SkipWarning};
use crate::error::CheckError;
use crate::extract::DocumentKind;

/// Documents that made it in, plus everything that was skipped.
#[derive(Debug, Default)]
pub struct LoadedCorpus {
    pub corpus: Corpus,
    pub warnings: Vec<SkipWarning>,
}

/// Load every regular file in `dir` (not recursive), sorted by file name.
pub fn load_directory(dir: &Path) -> Result<LoadedCorpus> {
    if !dir.exists() {
        return Err(CheckError::MissingDirectory(dir.to_path_buf()).into());
    }
    if !dir.is_dir() {
        return Err(CheckError::NotADirectory(dir.to_path_buf()).into());
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to list {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file())
        .collect();
    paths.sort();

    info!(dir = %dir.display(), files = paths.len(), "Loading submissions");

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Extracting [{bar:30}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut loaded = LoadedCorpus::default();
    for path in &paths {
        let id = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        pb.set_message(id.clone());

        let kind = DocumentKind::from_name(&id);
        if let DocumentKind::Unsupported(extension) = &kind {
            loaded.skip(
                id,
                SkipReason::Unsupported {
                    extension: extension.clone(),
                },
            );
            pb.inc(1);
            continue;
        }

        match fs::read(path) {
            Ok(bytes) => loaded.admit(id, &kind, bytes),
            Err(e) => loaded.skip(
                id,
                SkipReason::Unreadable {
                    error: e.to_string(),
                },
            ),
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(
        documents = loaded.corpus.len(),
        skipped = loaded.warnings.len(),
        "Corpus loaded"
    );
    Ok(loaded)
}

/// Load an in-memory file set (e.g. uploads), keeping the given order.
pub fn load_files<I, S>(files: I) -> LoadedCorpus
where
    I: IntoIterator<Item = (S, Vec<u8>)>,
    S: Into<String>,
{
    let mut loaded = LoadedCorpus::default();
    for (name, bytes) in files {
        let id = name.into();
        match DocumentKind::from_name(&id) {
            DocumentKind::Unsupported(extension) => {
                loaded.skip(id, SkipReason::Unsupported { extension })
            }
            kind => loaded.admit(id, &kind, bytes),
        }
    }
    loaded
}

impl LoadedCorpus {
    fn admit(&mut self, id: String, kind: &DocumentKind, bytes: Vec<u8>) {
        let Some(extractor) = kind.extractor() else {
            let extension = match kind {
                DocumentKind::Unsupported(extension) => extension.clone(),
                _ => String::new(),
            };
            return self.skip(id, SkipReason::Unsupported { extension });
        };

        debug!(document = %id, extractor = extractor.name(), "Extracting text");
        match extractor.extract(&bytes) {
            Ok(text) => {
                if !self.corpus.push(Document::new(id.clone(), bytes, text)) {
                    self.skip(id, SkipReason::Empty);
                }
            }
            Err(e) => self.skip(
                id,
                SkipReason::Unreadable {
                    error: format!("{e:#}"),
                },
            ),
        }
    }

    fn skip(&mut self, id: String, reason: SkipReason) {
        warn!(document = %id, reason = %reason, "Skipping document");
        self.warnings.push(SkipWarning { id, reason });
    }
}
