use std::sync::Arc;

use condense_model::catalog::ModelCatalog;
use condense_model::registry::{ModelLoader, ModelRegistry};

/// Shared application state, injected into all route handlers via Axum state.
pub struct AppState<L: ModelLoader> {
    pub registry: Arc<ModelRegistry<L>>,
    pub catalog: Arc<ModelCatalog>,
    pub max_upload_bytes: usize,
}

impl<L: ModelLoader> AppState<L> {
    pub fn new(registry: Arc<ModelRegistry<L>>, catalog: ModelCatalog, max_upload_bytes: usize) -> Self {
        Self {
            registry,
            catalog: Arc::new(catalog),
            max_upload_bytes,
        }
    }
}

impl<L: ModelLoader> Clone for AppState<L> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            catalog: Arc::clone(&self.catalog),
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}
