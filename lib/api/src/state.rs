use cinex_core::{Engine, Result, SharedEngine};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Shared application state: the swappable engine plus the dataset path
/// used for rebuilds.
pub struct AppState {
    engine: SharedEngine,
    data_file: PathBuf,
}

impl AppState {
    #[must_use]
    pub fn new(engine: Engine, data_file: PathBuf) -> Self {
        Self {
            engine: SharedEngine::new(engine),
            data_file,
        }
    }

    /// Snapshot of the engine currently in service.
    #[inline]
    #[must_use]
    pub fn engine(&self) -> Arc<Engine> {
        self.engine.load()
    }

    #[inline]
    #[must_use]
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Re-read the dataset and rebuild the engine. The swap happens only
    /// after a fully successful build; any failure leaves the previous
    /// engine in service.
    pub fn reload(&self) -> Result<usize> {
        let movies = cinex_dataset::load_movies(&self.data_file)?;
        let engine = Engine::build(movies)?;
        let count = engine.catalog().len();
        self.engine.swap(engine);
        info!(movies = count, "engine rebuilt and swapped into service");
        Ok(count)
    }
}
