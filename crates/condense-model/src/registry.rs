//! Process-wide memoization of loaded models.
//!
//! Each model id gets its own `OnceCell`: the first caller loads, concurrent
//! callers for the same id wait for that load, and later callers get the
//! shared instance. Entries are never evicted. A failed load leaves the cell
//! empty so the next lookup tries again.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::{Mutex, OnceCell};
use tracing::info;

use crate::error::SummarizeError;

/// Constructs a model instance for an id.
pub trait ModelLoader: Send + Sync {
    type Model: Send + Sync;

    fn load(
        &self,
        model_id: &str,
    ) -> impl Future<Output = Result<Self::Model, SummarizeError>> + Send;
}

type Slot<M> = Arc<OnceCell<Arc<M>>>;

pub struct ModelRegistry<L: ModelLoader> {
    loader: L,
    entries: Mutex<HashMap<String, Slot<L::Model>>>,
}

impl<L: ModelLoader> ModelRegistry<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Return the loaded model for `model_id`, loading it on first use.
    pub async fn get_or_load(&self, model_id: &str) -> Result<Arc<L::Model>, SummarizeError> {
        let slot = {
            let mut entries = self.entries.lock().await;
            Arc::clone(entries.entry(model_id.to_string()).or_default())
        };

        let model = slot
            .get_or_try_init(|| async {
                info!(model_id, "loading summarization model");
                self.loader.load(model_id).await.map(Arc::new)
            })
            .await?;

        Ok(Arc::clone(model))
    }

    /// Ids of the models loaded so far, sorted.
    pub async fn loaded(&self) -> Vec<String> {
        let entries = self.entries.lock().await;
        let mut ids: Vec<String> = entries
            .iter()
            .filter(|(_, slot)| slot.initialized())
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }
}
