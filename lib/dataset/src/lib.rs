//! # cinex Dataset
//!
//! Dataset layer for the cinex movie service: typed CSV ingestion into
//! [`cinex_core::Movie`] records.
//!
//! The loader reads the whole dataset once, in file order; that row order
//! is the position space every downstream index is built over. Malformed
//! rows are skipped with a warning, a malformed date coerces to `None`,
//! and an unreadable file is a fatal dataset error.

pub mod loader;

pub use loader::load_movies;
