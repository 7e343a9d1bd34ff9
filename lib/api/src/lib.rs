//! # cinex API
//!
//! REST surface for the cinex movie service. Handlers are thin: they
//! parse path parameters, query the immutable engine snapshot and render
//! structured JSON. The only mutating route is `/reload`, which rebuilds
//! the whole engine from the dataset and publishes it atomically.

pub mod rest;
pub mod state;

pub use rest::RestApi;
pub use state::AppState;
