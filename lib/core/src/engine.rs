use crate::catalog::Catalog;
use crate::recommend::{Recommendation, Recommender};
use crate::text::FeatureConfig;
use crate::{Movie, Result};
use parking_lot::RwLock;
use std::sync::Arc;

/// The immutable serve-phase state: one corpus snapshot with its catalog
/// aggregates and its recommendation index, built together so positions
/// always line up.
///
/// Building is the one-shot batch phase; it either completes fully or
/// fails without publishing anything. Serving is read-only and needs no
/// locking.
pub struct Engine {
    catalog: Catalog,
    recommender: Recommender,
}

impl Engine {
    /// Build with the default feature configuration (genres + overview +
    /// tagline, title excluded).
    pub fn build(movies: Vec<Movie>) -> Result<Self> {
        Self::build_with_config(movies, FeatureConfig::default())
    }

    /// Build catalog and recommender from one snapshot. The recommender
    /// is derived before the catalog takes ownership, so both see the
    /// exact same ordering.
    pub fn build_with_config(movies: Vec<Movie>, config: FeatureConfig) -> Result<Self> {
        let recommender = Recommender::build(&movies, &config)?;
        let catalog = Catalog::new(movies)?;
        Ok(Self {
            catalog,
            recommender,
        })
    }

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    #[must_use]
    pub fn recommender(&self) -> &Recommender {
        &self.recommender
    }

    /// Top-5 similar titles for a query title.
    #[inline]
    #[must_use]
    pub fn recommend(&self, title: &str) -> Recommendation {
        self.recommender.recommend(title)
    }
}

/// Atomically swappable engine handle.
///
/// Readers grab an `Arc` snapshot and keep using it for the duration of
/// their request; a rebuild publishes a whole new engine in one swap, so
/// no reader ever sees a matrix from one corpus paired with titles from
/// another.
pub struct SharedEngine {
    current: RwLock<Arc<Engine>>,
}

impl SharedEngine {
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        Self {
            current: RwLock::new(Arc::new(engine)),
        }
    }

    /// Snapshot of the engine currently in service.
    #[inline]
    #[must_use]
    pub fn load(&self) -> Arc<Engine> {
        self.current.read().clone()
    }

    /// Publish a rebuilt engine, returning the one it replaced.
    pub fn swap(&self, engine: Engine) -> Arc<Engine> {
        let next = Arc::new(engine);
        std::mem::replace(&mut *self.current.write(), next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn small_corpus() -> Vec<Movie> {
        vec![
            Movie::new("Toy Story").with_genres("Animation, Comedy, Family"),
            Movie::new("Jumanji").with_genres("Adventure, Fantasy, Family"),
        ]
    }

    #[test]
    fn test_empty_corpus_fails_the_build() {
        assert!(matches!(Engine::build(Vec::new()), Err(Error::EmptyCorpus)));
    }

    #[test]
    fn test_catalog_and_recommender_share_the_snapshot() {
        let engine = Engine::build(small_corpus()).unwrap();
        assert_eq!(engine.catalog().len(), engine.recommender().len());
        assert_eq!(engine.catalog().movies()[0].title, "Toy Story");
    }

    #[test]
    fn test_invalid_feature_config_fails_the_build() {
        let config = FeatureConfig {
            include_title: false,
            include_genres: false,
            include_overview: false,
            include_tagline: false,
        };
        assert!(matches!(
            Engine::build_with_config(small_corpus(), config),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_swap_publishes_the_new_corpus() {
        let shared = SharedEngine::new(Engine::build(small_corpus()).unwrap());
        assert_eq!(shared.load().catalog().len(), 2);

        let bigger = vec![
            Movie::new("A").with_genres("Drama"),
            Movie::new("B").with_genres("Drama"),
            Movie::new("C").with_genres("Drama"),
        ];
        let previous = shared.swap(Engine::build(bigger).unwrap());
        assert_eq!(previous.catalog().len(), 2);
        assert_eq!(shared.load().catalog().len(), 3);
        assert!(shared.load().recommend("C").found);
    }
}
