// Pairwise cosine similarity over TF-IDF rows.
//
// Rows are already L2-normalized, so cosine similarity is a sparse dot
// product. Only the upper triangle is computed; the lower triangle is a copy,
// which makes the matrix exactly symmetric rather than symmetric up to
// floating-point noise.

use serde::Serialize;

use super::tfidf::{FeatureMatrix, SparseRow};

/// Square, symmetric matrix of similarities in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityMatrix {
    n: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Build a matrix from precomputed values in row-major order.
    ///
    /// Returns None unless `values.len() == n * n`. Useful for plugging in a
    /// different similarity strategy.
    pub fn from_row_major(n: usize, values: Vec<f64>) -> Option<Self> {
        (values.len() == n * n).then_some(Self { n, values })
    }

    /// Cosine similarity between every pair of feature rows.
    pub fn from_features(features: &FeatureMatrix) -> Self {
        let n = features.n_rows();
        let mut values = vec![0.0; n * n];

        for i in 0..n {
            for j in i..n {
                let sim = sparse_dot(features.row(i), features.row(j)).clamp(0.0, 1.0);
                values[i * n + j] = sim;
                values[j * n + i] = sim;
            }
        }

        Self { n, values }
    }

    /// Number of documents (rows and columns).
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }
}

/// Dot product of two column-sorted sparse rows.
fn sparse_dot(a: &SparseRow, b: &SparseRow) -> f64 {
    let (mut i, mut j) = (0, 0);
    let mut sum = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}
