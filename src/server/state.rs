//! Server State
//!
//! Shared state accessible by all handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::catalog::Catalog;
use crate::config::Config;

/// Shared state for all handlers
#[derive(Clone)]
pub struct ServerState {
    /// Loaded configuration
    pub config: Arc<Config>,
    /// Catalog served to the UI
    pub catalog: Arc<Catalog>,
    /// Directory holding the built UI
    pub static_dir: PathBuf,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl ServerState {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        let static_dir = PathBuf::from(&config.server.static_dir);
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            static_dir,
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Entry page of the UI
    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }
}
