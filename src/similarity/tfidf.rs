// TF-IDF vectorizer over word n-grams.
//
// Tokens are maximal runs of two or more word characters in the lowercased
// text. Every contiguous window of n tokens (for each n in the configured
// range) becomes a feature. No stop words are removed.
//
// Weighting is raw count × smoothed idf:
//
//   idf(t) = ln((1 + N) / (1 + df(t))) + 1
//
// and each row is L2-normalized, so the cosine similarity of two rows is just
// their dot product. The vocabulary is rebuilt from scratch on every call.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inclusive range of n-gram lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgramRange {
    pub min: usize,
    pub max: usize,
}

impl NgramRange {
    /// Unigrams through trigrams.
    pub const STANDARD: NgramRange = NgramRange { min: 1, max: 3 };
    /// Unigrams through 5-grams: more context, same lexical method.
    pub const ENHANCED: NgramRange = NgramRange { min: 1, max: 5 };

    /// Build a range, normalizing a zero minimum to 1 and a swapped pair.
    pub fn new(min: usize, max: usize) -> Self {
        let min = min.max(1);
        Self {
            min: min.min(max.max(1)),
            max: max.max(min),
        }
    }
}

/// One document's features as (column, weight) pairs sorted by column.
pub type SparseRow = Vec<(usize, f64)>;

/// Row-per-document TF-IDF weights. Rows are L2-normalized (or all-zero).
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    vocabulary: Vec<String>,
    rows: Vec<SparseRow>,
}

impl FeatureMatrix {
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of distinct features (columns).
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Feature names in column order (sorted lexicographically).
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn row(&self, i: usize) -> &SparseRow {
        &self.rows[i]
    }

    pub fn rows(&self) -> &[SparseRow] {
        &self.rows
    }

    /// Longest n-gram in the vocabulary, counted in tokens.
    pub fn max_ngram_len(&self) -> usize {
        self.vocabulary
            .iter()
            .map(|term| term.split(' ').count())
            .max()
            .unwrap_or(0)
    }
}

/// Fits a vocabulary to a set of texts and produces TF-IDF rows.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    pub ngram_range: NgramRange,
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self {
            ngram_range: NgramRange::STANDARD,
        }
    }
}

impl TfIdfVectorizer {
    pub fn new(ngram_range: NgramRange) -> Self {
        Self { ngram_range }
    }

    /// Build the vocabulary from `texts` and weight every document against it.
    pub fn fit_transform(&self, texts: &[String]) -> FeatureMatrix {
        let counts: Vec<HashMap<String, u32>> = texts
            .iter()
            .map(|text| count_ngrams(&tokenize(text), self.ngram_range))
            .collect();

        // Sorted vocabulary gives stable column indices
        let terms: BTreeSet<&str> = counts
            .iter()
            .flat_map(|c| c.keys().map(|k| k.as_str()))
            .collect();
        let vocabulary: Vec<String> = terms.into_iter().map(str::to_string).collect();
        let index: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i))
            .collect();

        let mut document_frequency = vec![0u32; vocabulary.len()];
        for doc in &counts {
            for term in doc.keys() {
                document_frequency[index[term.as_str()]] += 1;
            }
        }

        let n_docs = texts.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let rows: Vec<SparseRow> = counts
            .iter()
            .map(|doc| {
                let weighted: BTreeMap<usize, f64> = doc
                    .iter()
                    .map(|(term, &tf)| {
                        let col = index[term.as_str()];
                        (col, tf as f64 * idf[col])
                    })
                    .collect();
                l2_normalize(weighted.into_iter().collect())
            })
            .collect();

        debug!(
            documents = texts.len(),
            features = vocabulary.len(),
            min_n = self.ngram_range.min,
            max_n = self.ngram_range.max,
            "Vectorized corpus"
        );

        FeatureMatrix { vocabulary, rows }
    }
}

fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("valid regex"))
}

/// Lowercase and split into word tokens of two or more characters.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    token_re()
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Count every n-gram in the range over a token sequence.
pub fn count_ngrams(tokens: &[String], range: NgramRange) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for n in range.min..=range.max.min(tokens.len()) {
        for window in tokens.windows(n) {
            *counts.entry(window.join(" ")).or_insert(0) += 1;
        }
    }
    counts
}

fn l2_normalize(mut row: SparseRow) -> SparseRow {
    let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for (_, w) in &mut row {
            *w /= norm;
        }
    }
    row
}
