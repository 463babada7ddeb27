// Similarity strategy trait — swap-ready abstraction.
//
// Anything that can turn N texts into an N×N similarity matrix can drive the
// ranking, risk labels and summary. The default is lexical TF-IDF; an
// embedding-based strategy could replace it without touching the rest of the
// pipeline.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::matrix::SimilarityMatrix;
use super::tfidf::NgramRange;

/// Trait for computing pairwise similarity across a set of texts.
pub trait SimilarityStrategy {
    /// Human-readable name for logs and report headers
    fn name(&self) -> &str;

    /// Produce a symmetric matrix with one row and column per text.
    fn similarity_matrix(&self, texts: &[String]) -> Result<SimilarityMatrix>;
}

/// Comparison granularity.
///
/// Both modes are lexical TF-IDF. Enhanced only widens the n-gram window to
/// capture more word order; it does not understand meaning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonMode {
    #[default]
    Standard,
    Enhanced,
}

impl ComparisonMode {
    pub fn ngram_range(&self) -> NgramRange {
        match self {
            ComparisonMode::Standard => NgramRange::STANDARD,
            ComparisonMode::Enhanced => NgramRange::ENHANCED,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonMode::Standard => "standard",
            ComparisonMode::Enhanced => "enhanced",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ComparisonMode::Standard => "Standard TF-IDF (1-3 word n-grams)",
            ComparisonMode::Enhanced => "Enhanced lexical TF-IDF (1-5 word n-grams)",
        }
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComparisonMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "1" => Ok(ComparisonMode::Standard),
            "enhanced" | "2" => Ok(ComparisonMode::Enhanced),
            other => anyhow::bail!("Unknown comparison mode '{other}' (expected standard or enhanced)"),
        }
    }
}
