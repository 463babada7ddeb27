// Similarity engine — vectorization, pairwise scoring and ranking.

pub mod matrix;
pub mod ranking;
pub mod tfidf;
pub mod traits;

use anyhow::Result;

use self::matrix::SimilarityMatrix;
use self::tfidf::{NgramRange, TfIdfVectorizer};
use self::traits::{ComparisonMode, SimilarityStrategy};

/// The default strategy: TF-IDF over word n-grams, compared by cosine.
#[derive(Debug, Clone)]
pub struct TfIdfSimilarity {
    vectorizer: TfIdfVectorizer,
    name: String,
}

impl TfIdfSimilarity {
    pub fn new(ngram_range: NgramRange) -> Self {
        Self {
            vectorizer: TfIdfVectorizer::new(ngram_range),
            name: format!("tf-idf ({}-{} grams)", ngram_range.min, ngram_range.max),
        }
    }

    pub fn for_mode(mode: ComparisonMode) -> Self {
        Self::new(mode.ngram_range())
    }
}

impl SimilarityStrategy for TfIdfSimilarity {
    fn name(&self) -> &str {
        &self.name
    }

    fn similarity_matrix(&self, texts: &[String]) -> Result<SimilarityMatrix> {
        if texts.is_empty() {
            anyhow::bail!("No texts to compare");
        }
        let features = self.vectorizer.fit_transform(texts);
        Ok(SimilarityMatrix::from_features(&features))
    }
}
