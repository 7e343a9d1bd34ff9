use crate::features::{FeatureBuilder, Vocabulary};
use crate::similarity::SimilarityMatrix;
use crate::text::FeatureConfig;
use crate::{Movie, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// How many similar titles a query returns at most.
pub const RECOMMENDATION_LIMIT: usize = 5;

/// Result of a recommendation query.
///
/// A miss is a structured result, never an error: `found` is false and
/// `titles` is empty. On a hit, `titles` holds at most
/// [`RECOMMENDATION_LIMIT`] entries ranked by descending similarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub found: bool,
    pub titles: Vec<String>,
}

impl Recommendation {
    #[inline]
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            found: false,
            titles: Vec::new(),
        }
    }
}

/// Read-only top-k lookup over the precomputed similarity matrix.
///
/// Holds its own copy of the corpus titles in build order, so matrix rows
/// and titles can never drift apart. Queries take no locks and mutate
/// nothing.
pub struct Recommender {
    titles: Vec<String>,
    by_title: AHashMap<String, usize>,
    vocabulary: Vocabulary,
    matrix: SimilarityMatrix,
}

impl Recommender {
    /// Build vocabulary, feature vectors and the similarity matrix from a
    /// corpus snapshot. Single-threaded, one-shot: a failed build leaves
    /// nothing behind.
    pub fn build(movies: &[Movie], config: &FeatureConfig) -> Result<Self> {
        config.validate()?;

        let builder = FeatureBuilder::new(config.clone());
        let (vocabulary, vectors) = builder.build(movies);
        let matrix = SimilarityMatrix::build(&vectors)?;

        let titles: Vec<String> = movies.iter().map(|m| m.title.clone()).collect();
        let mut by_title = AHashMap::with_capacity(titles.len());
        for (position, title) in titles.iter().enumerate() {
            // duplicate titles resolve to the first occurrence in corpus order
            by_title.entry(title.to_lowercase()).or_insert(position);
        }

        Ok(Self {
            titles,
            by_title,
            vocabulary,
            matrix,
        })
    }

    /// Number of movies the index was built over.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[inline]
    #[must_use]
    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    /// Top-5 most similar titles for a query title.
    ///
    /// Matching is an exact comparison on lowercased titles. Candidates
    /// are ranked by descending similarity, ties broken by ascending
    /// corpus position; the queried record itself is always excluded.
    #[must_use]
    pub fn recommend(&self, title: &str) -> Recommendation {
        let Some(&position) = self.by_title.get(&title.to_lowercase()) else {
            return Recommendation::not_found();
        };

        let row = self.matrix.row(position);
        let mut scored: Vec<(usize, f32)> = row
            .iter()
            .copied()
            .enumerate()
            .filter(|&(candidate, _)| candidate != position)
            .collect();
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });

        let titles = scored
            .iter()
            .take(RECOMMENDATION_LIMIT)
            .map(|&(candidate, _)| self.titles[candidate].clone())
            .collect();

        Recommendation {
            found: true,
            titles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_corpus() -> Vec<Movie> {
        vec![
            Movie::new("Toy Story")
                .with_genres("Animation, Comedy, Family")
                .with_overview("A story about toys coming to life."),
            Movie::new("Jumanji")
                .with_genres("Adventure, Fantasy, Family")
                .with_overview("A magical board game unleashes adventure."),
            Movie::new("Grumpier Old Men")
                .with_genres("Comedy, Romance")
                .with_overview("A continuation of a comedic love story."),
        ]
    }

    fn build(movies: &[Movie]) -> Recommender {
        Recommender::build(movies, &FeatureConfig::default()).unwrap()
    }

    #[test]
    fn test_not_found_is_structured() {
        let recommender = build(&sample_corpus());
        let result = recommender.recommend("Película Que No Existe");
        assert_eq!(result, Recommendation::not_found());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let recommender = build(&sample_corpus());
        let lower = recommender.recommend("toy story");
        let upper = recommender.recommend("TOY STORY");
        assert!(lower.found);
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_query_excludes_itself() {
        let recommender = build(&sample_corpus());
        let result = recommender.recommend("Toy Story");
        assert!(result.found);
        assert!(!result.titles.contains(&"Toy Story".to_string()));
    }

    #[test]
    fn test_result_is_deterministic() {
        let recommender = build(&sample_corpus());
        let first = recommender.recommend("Jumanji");
        let second = recommender.recommend("Jumanji");
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_titles_resolve_to_first_occurrence() {
        let mut movies = sample_corpus();
        movies.push(Movie::new("Toy Story").with_genres("Horror"));
        let recommender = build(&movies);
        // the first Toy Story shares tokens with Grumpier Old Men; the
        // horror remake shares nothing with it
        let result = recommender.recommend("Toy Story");
        assert!(result.found);
        assert_eq!(result.titles[0], "Grumpier Old Men");
    }

    #[test]
    fn test_singleton_corpus_returns_empty_list() {
        let movies = vec![Movie::new("Solo").with_genres("Drama")];
        let recommender = build(&movies);
        let result = recommender.recommend("Solo");
        assert!(result.found);
        assert!(result.titles.is_empty());
    }

    #[test]
    fn test_ties_break_by_corpus_position() {
        // three records with no shared tokens: every candidate scores 0
        let movies = vec![
            Movie::new("First").with_genres("Western"),
            Movie::new("Second").with_genres("Noir"),
            Movie::new("Third").with_genres("Musical"),
            Movie::new("Fourth").with_genres("Silent"),
        ];
        let recommender = build(&movies);
        let result = recommender.recommend("Second");
        assert_eq!(result.titles, vec!["First", "Third", "Fourth"]);
    }
}
