use crate::config::ServerConfig;
use rucities_core::DefaultStore;

/// Application state shared across handlers.
///
/// The store is read-only after startup, so handlers share it through the
/// surrounding `Arc` without any locking.
#[derive(Debug)]
pub struct AppState {
    pub store: DefaultStore,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(store: DefaultStore, config: ServerConfig) -> Self {
        Self { store, config }
    }
}
