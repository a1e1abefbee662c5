//! Application state for the web layer.

use std::sync::Arc;

use crate::index::RouteIndex;

/// Shared application state.
///
/// The route index is fully built before the server starts accepting
/// requests and never mutated afterwards, so handlers share it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    /// The station-to-routes index answering connectivity queries.
    pub index: Arc<RouteIndex>,
}

impl AppState {
    /// Create a new app state around a fully loaded index.
    pub fn new(index: RouteIndex) -> Self {
        Self {
            index: Arc::new(index),
        }
    }
}
