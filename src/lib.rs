//! # cinex
//!
//! An in-memory movie catalog service with content-based recommendations.
//!
//! cinex loads a fixed CSV movie dataset once at startup, serves tabular
//! lookups and aggregates over it, and recommends similar titles from a
//! precomputed pairwise cosine-similarity index over sparse token-count
//! vectors.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cinex --data-file ./movies.csv --http-port 8080
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use cinex::prelude::*;
//!
//! let movies = vec![
//!     Movie::new("Toy Story")
//!         .with_genres("Animation, Comedy, Family")
//!         .with_overview("A story about toys coming to life."),
//!     Movie::new("Jumanji")
//!         .with_genres("Adventure, Fantasy, Family")
//!         .with_overview("A magical board game unleashes adventure."),
//! ];
//!
//! // Build phase: vocabulary, vectors and similarity matrix, once
//! let engine = Engine::build(movies).unwrap();
//!
//! // Serve phase: read-only queries
//! let result = engine.recommend("toy story");
//! assert!(result.found);
//! ```
//!
//! ## Crate Structure
//!
//! cinex is composed of several crates:
//!
//! - `cinex-core` - Feature extraction, similarity index, recommender,
//!   catalog aggregates
//! - `cinex-dataset` - Typed CSV ingestion
//! - `cinex-api` - REST API
//!
//! ## Design
//!
//! - **One-shot build phase**: the dataset is read and the index built
//!   exactly once; queries never touch the filesystem
//! - **Atomic rebuilds**: `/reload` publishes a whole new engine via one
//!   pointer swap, never mutating the one in service
//! - **Structured results**: title misses are data (`found: false`),
//!   not errors

// Re-export core types
pub use cinex_core::{
    ActorReport, Catalog, DirectorReport, Engine, Error, FeatureBuilder, FeatureConfig,
    FeatureVector, FilmReturn, Movie, Recommendation, Recommender, Result, ScoreReport,
    SharedEngine, SimilarityMatrix, Vocabulary, VotesReport, RECOMMENDATION_LIMIT,
    VOTE_COUNT_THRESHOLD,
};

// Re-export dataset loading
pub use cinex_dataset::load_movies;

// Re-export API
pub use cinex_api::{AppState, RestApi};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ActorReport, AppState, Catalog, DirectorReport, Engine, Error, FeatureConfig, FilmReturn,
        Movie, Recommendation, Recommender, RestApi, Result, ScoreReport, SharedEngine,
        SimilarityMatrix, VotesReport, RECOMMENDATION_LIMIT,
    };
    pub use cinex_dataset::load_movies;
}
