pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use error::types::AppError;

use std::sync::Arc;

use crate::config::Settings;
use crate::database::DataStore;
use crate::services::catalog_service::ResponseCatalog;

/// Shared application state. Everything in here is read-only after
/// startup, so handlers can clone it freely.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub datastore: DataStore,
    pub catalog: Arc<ResponseCatalog>,
}

impl AppState {
    pub fn new(settings: Settings, datastore: DataStore) -> Self {
        Self {
            settings,
            datastore,
            catalog: Arc::new(ResponseCatalog::new()),
        }
    }
}
