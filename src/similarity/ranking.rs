// Flatten a similarity matrix into ranked document pairs.
//
// Every unordered pair (i, j) with i < j is emitted exactly once, in row-major
// enumeration order, then stably sorted by score descending. Equal scores keep
// their enumeration order, so identical input always ranks identically.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::matrix::SimilarityMatrix;
use crate::scoring::risk::RiskLevel;

/// Similarity between two documents, as a percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairResult {
    pub doc_a: String,
    pub doc_b: String,
    /// Percent scale, 0-100
    pub score: f64,
    pub risk: RiskLevel,
}

impl PairResult {
    pub fn new(doc_a: impl Into<String>, doc_b: impl Into<String>, score: f64) -> Self {
        Self {
            doc_a: doc_a.into(),
            doc_b: doc_b.into(),
            score,
            risk: RiskLevel::from_score(score),
        }
    }
}

/// Number of unordered pairs among `n` documents.
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Enumerate pairs (i < j) from the matrix and sort them by score, highest first.
pub fn rank_pairs(ids: &[String], matrix: &SimilarityMatrix) -> Result<Vec<PairResult>> {
    if ids.len() != matrix.len() {
        anyhow::bail!(
            "Similarity matrix has {} rows but {} documents were given",
            matrix.len(),
            ids.len()
        );
    }

    let mut results = Vec::with_capacity(pair_count(ids.len()));
    for i in 0..ids.len() {
        for j in (i + 1)..ids.len() {
            results.push(PairResult::new(
                ids[i].clone(),
                ids[j].clone(),
                matrix.get(i, j) * 100.0,
            ));
        }
    }

    sort_by_score(&mut results);
    Ok(results)
}

/// Stable sort, highest score first.
pub fn sort_by_score(results: &mut [PairResult]) {
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
