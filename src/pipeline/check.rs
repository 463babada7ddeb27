// Similarity check pipeline: load → vectorize → score → rank → summarize.
//
// Everything runs once, in order, on the calling thread. The feature matrix
// and similarity matrix live only inside `compare_corpus`.

use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::loader::{self, LoadedCorpus};
use crate::corpus::{Document, SkipWarning};
use crate::error::CheckError;
use crate::scoring::risk::PlagiarismBadge;
use crate::scoring::summary::SummaryStats;
use crate::similarity::ranking::{rank_pairs, PairResult};
use crate::similarity::traits::{ComparisonMode, SimilarityStrategy};
use crate::similarity::TfIdfSimilarity;

/// Knobs for a single run.
#[derive(Debug, Clone, Copy)]
pub struct CheckOptions {
    pub mode: ComparisonMode,
    /// Percent (0-100). Only decides which pairs get flagged on screen;
    /// reports always include every pair.
    pub threshold: f64,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            mode: ComparisonMode::Standard,
            threshold: crate::config::DEFAULT_THRESHOLD,
        }
    }
}

/// Name and size of a document that took part in the run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentInfo {
    pub id: String,
    pub characters: usize,
}

impl From<&Document> for DocumentInfo {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            characters: doc.char_count(),
        }
    }
}

/// Full result of a run with at least one pair.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityReport {
    pub generated_at: DateTime<Utc>,
    pub mode: ComparisonMode,
    pub threshold: f64,
    pub documents: Vec<DocumentInfo>,
    /// Every pair, highest score first
    pub results: Vec<PairResult>,
    pub summary: SummaryStats,
    pub warnings: Vec<SkipWarning>,
}

impl SimilarityReport {
    /// Pairs at or above the display threshold, in ranked order.
    pub fn above_threshold(&self) -> impl Iterator<Item = &PairResult> {
        self.results.iter().filter(|r| r.score >= self.threshold)
    }

    pub fn is_flagged(&self, result: &PairResult) -> bool {
        result.score >= self.threshold
    }

    /// Verdict for the single most similar pair.
    pub fn top_badge(&self) -> PlagiarismBadge {
        PlagiarismBadge::from_score(self.summary.highest.score)
    }
}

/// How a run ended when it didn't fail outright.
#[derive(Debug, Clone)]
pub enum CheckOutcome {
    Compared(SimilarityReport),
    /// Exactly one valid document: nothing to pair it with
    NothingToCompare {
        document: DocumentInfo,
        warnings: Vec<SkipWarning>,
    },
}

/// Run a check over every supported file in `dir` with the default strategy.
pub fn run_check(dir: &Path, options: &CheckOptions) -> Result<CheckOutcome> {
    let loaded = loader::load_directory(dir)?;
    if loaded.corpus.is_empty() {
        return Err(CheckError::NoDocuments(dir.to_path_buf()).into());
    }
    let strategy = TfIdfSimilarity::for_mode(options.mode);
    compare_corpus(loaded, &strategy, options)
}

/// Run a check over an in-memory file set with the default strategy.
pub fn run_check_files<I, S>(files: I, options: &CheckOptions) -> Result<CheckOutcome>
where
    I: IntoIterator<Item = (S, Vec<u8>)>,
    S: Into<String>,
{
    let loaded = loader::load_files(files);
    if loaded.corpus.is_empty() {
        return Err(CheckError::NoDocumentsProvided.into());
    }
    let strategy = TfIdfSimilarity::for_mode(options.mode);
    compare_corpus(loaded, &strategy, options)
}

/// Score an already-loaded corpus with any similarity strategy.
pub fn compare_corpus(
    loaded: LoadedCorpus,
    strategy: &dyn SimilarityStrategy,
    options: &CheckOptions,
) -> Result<CheckOutcome> {
    let LoadedCorpus { corpus, warnings } = loaded;

    let documents: Vec<DocumentInfo> = corpus.documents().iter().map(DocumentInfo::from).collect();

    match documents.len() {
        0 => return Err(CheckError::NoDocumentsProvided.into()),
        1 => {
            info!(document = %documents[0].id, "Only one valid document, nothing to compare");
            let document = documents.into_iter().next().ok_or(CheckError::NoDocumentsProvided)?;
            return Ok(CheckOutcome::NothingToCompare { document, warnings });
        }
        _ => {}
    }

    info!(
        documents = documents.len(),
        strategy = strategy.name(),
        "Computing pairwise similarity"
    );

    let matrix = strategy.similarity_matrix(&corpus.texts())?;
    let results = rank_pairs(&corpus.ids(), &matrix)?;
    let summary = SummaryStats::compute(documents.len(), &results)
        .ok_or(CheckError::InsufficientDocuments {
            found: documents.len(),
        })?;

    info!(
        comparisons = summary.total_comparisons,
        highest = summary.highest.score,
        average = summary.average,
        "Similarity check complete"
    );

    Ok(CheckOutcome::Compared(SimilarityReport {
        generated_at: Utc::now(),
        mode: options.mode,
        threshold: options.threshold,
        documents,
        results,
        summary,
        warnings,
    }))
}
