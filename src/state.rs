use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::store::{ApplicationStore, FarmerStore, SchemeStore, StoreHealth};

/// Shared application state available to all handlers via `State<AppState>`.
///
/// The stores are trait objects so the router runs unchanged against
/// Postgres in production and in-memory stores in tests. Cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    pub farmers: Arc<dyn FarmerStore>,
    pub schemes: Arc<dyn SchemeStore>,
    pub applications: Arc<dyn ApplicationStore>,
    pub health: Arc<dyn StoreHealth>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build state from one store value implementing every contract.
    pub fn new<S>(store: S, config: AppConfig) -> Self
    where
        S: FarmerStore + SchemeStore + ApplicationStore + StoreHealth + 'static,
    {
        let store = Arc::new(store);

        Self {
            farmers: store.clone(),
            schemes: store.clone(),
            applications: store.clone(),
            health: store,
            config: Arc::new(config),
        }
    }
}
