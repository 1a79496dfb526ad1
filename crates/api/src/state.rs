use std::sync::Arc;

use agenda_db::Storage;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: both fields are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The persistence adapter chosen at startup.
    pub storage: Arc<dyn Storage>,
    /// Server configuration (JWT settings are read by the auth extractors).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }
}
