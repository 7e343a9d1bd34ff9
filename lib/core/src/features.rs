use crate::text::{tokenize, FeatureConfig};
use crate::Movie;
use ahash::AHashMap;
use std::collections::{BTreeMap, BTreeSet};

/// Corpus-wide mapping from normalized token to vector column.
///
/// Columns are assigned in alphabetical token order, so two builds over
/// identical input produce identical vocabularies.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    index: AHashMap<String, u32>,
}

impl Vocabulary {
    fn from_documents(documents: &[Vec<String>]) -> Self {
        let mut terms: BTreeSet<&str> = BTreeSet::new();
        for tokens in documents {
            for token in tokens {
                terms.insert(token.as_str());
            }
        }
        // BTreeSet iterates in sorted order, fixing the column assignment
        let index = terms
            .iter()
            .enumerate()
            .map(|(column, term)| (term.to_string(), column as u32))
            .collect();
        Self { index }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Column index of a token, if it occurs anywhere in the corpus.
    #[inline]
    #[must_use]
    pub fn column(&self, token: &str) -> Option<u32> {
        self.index.get(token).copied()
    }
}

/// Sparse per-movie token counts over the shared vocabulary.
///
/// Entries are `(column, count)` pairs sorted by column; the Euclidean
/// norm is precomputed at construction so pairwise cosine stays O(nnz).
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    terms: Vec<(u32, u32)>,
    norm: f32,
}

impl FeatureVector {
    fn from_counts(counts: BTreeMap<u32, u32>) -> Self {
        let terms: Vec<(u32, u32)> = counts.into_iter().collect();
        let norm = terms
            .iter()
            .map(|&(_, count)| (count as f32) * (count as f32))
            .sum::<f32>()
            .sqrt();
        Self { terms, norm }
    }

    /// An all-zero vector; produced by records with empty combined text.
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self {
            terms: Vec::new(),
            norm: 0.0,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of distinct tokens with a non-zero count.
    #[inline]
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    #[must_use]
    pub fn norm(&self) -> f32 {
        self.norm
    }

    /// Sparse dot product by merge-walking the sorted column lists.
    #[must_use]
    pub fn dot(&self, other: &FeatureVector) -> f32 {
        let mut sum = 0.0f32;
        let (mut a, mut b) = (0usize, 0usize);
        while a < self.terms.len() && b < other.terms.len() {
            let (col_a, count_a) = self.terms[a];
            let (col_b, count_b) = other.terms[b];
            match col_a.cmp(&col_b) {
                std::cmp::Ordering::Less => a += 1,
                std::cmp::Ordering::Greater => b += 1,
                std::cmp::Ordering::Equal => {
                    sum += (count_a as f32) * (count_b as f32);
                    a += 1;
                    b += 1;
                }
            }
        }
        sum
    }

    /// Compute cosine similarity with another vector.
    ///
    /// Counts are non-negative, so the result lies in [0, 1]. Either
    /// vector having zero norm forces 0 rather than dividing by zero.
    #[inline]
    #[must_use]
    pub fn cosine_similarity(&self, other: &FeatureVector) -> f32 {
        if self.norm == 0.0 || other.norm == 0.0 {
            return 0.0;
        }
        self.dot(other) / (self.norm * other.norm)
    }
}

/// Derives the (Vocabulary, FeatureVector) pair for a corpus snapshot.
#[derive(Debug, Clone, Default)]
pub struct FeatureBuilder {
    config: FeatureConfig,
}

impl FeatureBuilder {
    #[inline]
    #[must_use]
    pub fn new(config: FeatureConfig) -> Self {
        Self { config }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &FeatureConfig {
        &self.config
    }

    /// Tokenize every movie's combined text and produce count vectors
    /// over a single corpus-wide vocabulary. Duplicate titles are kept
    /// as separate records; empty combined text yields a zero vector.
    #[must_use]
    pub fn build(&self, movies: &[Movie]) -> (Vocabulary, Vec<FeatureVector>) {
        let documents: Vec<Vec<String>> = movies
            .iter()
            .map(|movie| tokenize(&self.config.combined_text(movie)))
            .collect();

        let vocabulary = Vocabulary::from_documents(&documents);

        let vectors = documents
            .iter()
            .map(|tokens| {
                if tokens.is_empty() {
                    return FeatureVector::zero();
                }
                let mut counts: BTreeMap<u32, u32> = BTreeMap::new();
                for token in tokens {
                    // every corpus token is in the vocabulary by construction
                    if let Some(column) = vocabulary.column(token) {
                        *counts.entry(column).or_insert(0) += 1;
                    }
                }
                FeatureVector::from_counts(counts)
            })
            .collect();

        (vocabulary, vectors)
    }
}
