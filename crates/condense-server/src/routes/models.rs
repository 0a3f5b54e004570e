use axum::Json;
use axum::extract::State;

use condense_model::catalog::ModelCatalog;
use condense_model::registry::ModelLoader;

use crate::state::AppState;

/// Selectable models; the first entry is the default selection.
pub async fn list_models<L: ModelLoader>(State(state): State<AppState<L>>) -> Json<ModelCatalog> {
    Json(state.catalog.as_ref().clone())
}
