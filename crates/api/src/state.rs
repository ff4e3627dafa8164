use std::sync::Arc;

use cardex_db::store::CardStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the store sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The card record store (Postgres or in-memory).
    pub store: Arc<dyn CardStore>,
}

impl AppState {
    pub fn new(store: impl CardStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
