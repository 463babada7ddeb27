// Corpus-level summary statistics over ranked pair results.

use serde::{Deserialize, Serialize};

use crate::similarity::ranking::PairResult;

/// Headline numbers for one similarity run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_documents: usize,
    pub total_comparisons: usize,
    pub highest: PairResult,
    pub lowest: PairResult,
    /// Mean score across all pairs, percent scale
    pub average: f64,
}

impl SummaryStats {
    /// Summarize a set of pair results.
    ///
    /// Returns None when there are no pairs — a single-document corpus has
    /// nothing to compare, and there is no meaningful average of nothing.
    ///
    /// On ranked input, `highest` is the first result and `lowest` the last.
    /// Unsorted input works too: the earliest maximum and the latest minimum
    /// are picked, which is the same thing after a stable descending sort.
    pub fn compute(total_documents: usize, results: &[PairResult]) -> Option<Self> {
        let first = results.first()?;

        let mut highest = first;
        let mut lowest = first;
        let mut sum = 0.0;
        for r in results {
            if r.score > highest.score {
                highest = r;
            }
            if r.score <= lowest.score {
                lowest = r;
            }
            sum += r.score;
        }

        Some(Self {
            total_documents,
            total_comparisons: results.len(),
            highest: highest.clone(),
            lowest: lowest.clone(),
            average: sum / results.len() as f64,
        })
    }
}
