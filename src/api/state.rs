use std::sync::Arc;

use crate::catalog::Catalog;

/// Shared application state
///
/// The catalog is immutable once loaded; handlers share it through an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Wraps a loaded catalog for sharing across handlers
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
