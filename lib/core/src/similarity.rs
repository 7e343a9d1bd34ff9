use crate::features::FeatureVector;
use crate::{Error, Result};

/// Dense N×N matrix of pairwise cosine similarities over the corpus.
///
/// Built once from a corpus snapshot and immutable afterwards. Each
/// unordered pair is computed once and mirrored, so symmetry holds
/// structurally rather than by floating-point coincidence. The diagonal
/// is fixed at 1 even for zero-norm vectors.
///
/// The build is the dominant cost of the whole service: O(N²) pairs with
/// a sparse dot product per pair, and N² floats of memory. That quadratic
/// footprint is the scalability ceiling; the corpus sizes served here stay
/// well under it.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f32>,
}

impl SimilarityMatrix {
    /// Compute the full pairwise matrix. Fails with [`Error::EmptyCorpus`]
    /// when there is nothing to index.
    pub fn build(vectors: &[FeatureVector]) -> Result<Self> {
        if vectors.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let n = vectors.len();
        let mut data = vec![0.0f32; n * n];
        for i in 0..n {
            // self-similarity is 1 by definition, independent of the norm
            data[i * n + i] = 1.0;
            for j in (i + 1)..n {
                let score = vectors[i].cosine_similarity(&vectors[j]);
                data[i * n + j] = score;
                data[j * n + i] = score;
            }
        }

        Ok(Self { n, data })
    }

    /// Number of corpus rows the matrix was built over.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.data[i * self.n + j]
    }

    /// Full similarity row for corpus position `i`.
    #[inline]
    #[must_use]
    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.n..(i + 1) * self.n]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::FeatureConfig;
    use crate::{FeatureBuilder, Movie};

    fn build_matrix(movies: &[Movie]) -> SimilarityMatrix {
        let builder = FeatureBuilder::new(FeatureConfig::default());
        let (_, vectors) = builder.build(movies);
        SimilarityMatrix::build(&vectors).unwrap()
    }

    #[test]
    fn test_empty_corpus_fails() {
        let result = SimilarityMatrix::build(&[]);
        assert!(matches!(result, Err(Error::EmptyCorpus)));
    }

    #[test]
    fn test_symmetry_and_diagonal() {
        let movies = vec![
            Movie::new("A").with_genres("Action, Thriller"),
            Movie::new("B").with_genres("Action, Drama"),
            Movie::new("C").with_genres("Documentary"),
        ];
        let matrix = build_matrix(&movies);
        for i in 0..matrix.len() {
            assert_eq!(matrix.get(i, i), 1.0);
            for j in 0..matrix.len() {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
                assert!((0.0..=1.0).contains(&matrix.get(i, j)));
            }
        }
    }

    #[test]
    fn test_zero_vector_row_scores_zero_off_diagonal() {
        let movies = vec![
            Movie::new("Described").with_genres("Action"),
            // no text at all -> zero vector
            Movie::new("Bare"),
        ];
        let matrix = build_matrix(&movies);
        assert_eq!(matrix.get(0, 1), 0.0);
        assert_eq!(matrix.get(1, 0), 0.0);
        // the diagonal stays 1 even for the degenerate record
        assert_eq!(matrix.get(1, 1), 1.0);
    }

    #[test]
    fn test_row_matches_get() {
        let movies = vec![
            Movie::new("A").with_genres("Action"),
            Movie::new("B").with_genres("Action, Drama"),
        ];
        let matrix = build_matrix(&movies);
        let row = matrix.row(0);
        assert_eq!(row.len(), 2);
        assert_eq!(row[1], matrix.get(0, 1));
    }
}
