use std::sync::Arc;

use crate::config::Config;
use crate::services::{DiskPhotoStore, PhotoStore};

/// Shared application state, immutable after startup
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub photo_store: Arc<dyn PhotoStore>,
}

impl AppState {
    /// Builds state that stores photos on disk under `config.photo_dir`
    pub fn new(config: Config) -> Self {
        let photo_store = Arc::new(DiskPhotoStore::new(&config.photo_dir));
        Self::with_photo_store(config, photo_store)
    }

    pub fn with_photo_store(config: Config, photo_store: Arc<dyn PhotoStore>) -> Self {
        Self {
            config: Arc::new(config),
            photo_store,
        }
    }
}
