//! # cinex Core
//!
//! Core library for the cinex movie service.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`Movie`] - Typed record of the movie dataset
//! - [`FeatureBuilder`] - Text-to-vector feature construction
//! - [`SimilarityMatrix`] - Pairwise cosine-similarity index
//! - [`Recommender`] - Top-5 title lookup over the matrix
//! - [`Catalog`] - Tabular lookups and release/actor/director aggregates
//! - [`Engine`] - One-shot build phase and read-only serve phase
//!
//! ## Example
//!
//! ```rust
//! use cinex_core::{Engine, Movie};
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
//! let engine = Engine::build(movies).unwrap();
//! let result = engine.recommend("Toy Story");
//! assert!(result.found);
//! assert_eq!(result.titles, vec!["Jumanji"]);
//! ```

pub mod catalog;
pub mod engine;
pub mod error;
pub mod features;
pub mod movie;
pub mod recommend;
pub mod similarity;
pub mod text;

pub use catalog::{
    month_from_name, weekday_from_name, ActorReport, Catalog, DirectorReport, FilmReturn,
    ScoreReport, VotesReport, VOTE_COUNT_THRESHOLD,
};
pub use engine::{Engine, SharedEngine};
pub use error::{Error, Result};
pub use features::{FeatureBuilder, FeatureVector, Vocabulary};
pub use movie::Movie;
pub use recommend::{Recommendation, Recommender, RECOMMENDATION_LIMIT};
pub use similarity::SimilarityMatrix;
pub use text::{tokenize, FeatureConfig, STOP_WORDS};
