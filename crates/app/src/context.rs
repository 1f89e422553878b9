//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{RestAuthClient, SessionManager},
    backend::{BackendHandle, BackendHandleError},
    config::AppConfig,
    domain::{
        carts::{CartsService, KvCartsService},
        catalog::{CatalogService, RestCatalogService},
        orders::{OrdersService, RestOrdersService},
        suggestions::{RestSuggestionsApi, SuggestionsApi},
    },
    storage::{FileStore, KeyValueStore},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to the hosted backend")]
    Backend(#[from] BackendHandleError),
}

/// Every service handle the storefront works through, built once and passed
/// in explicitly.
#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
    pub suggestions: Arc<dyn SuggestionsApi>,
    pub sessions: Arc<SessionManager>,
}

impl AppContext {
    /// Build the full service graph from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend connection handle cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppInitError> {
        let backend = BackendHandle::connect(&config.backend.backend_url, &config.backend.api_key)?;
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&config.storage.store_path));

        let auth = Arc::new(RestAuthClient::new(
            backend.clone(),
            Arc::clone(&store),
            &config.storage.credential_key,
        ));

        Ok(Self {
            catalog: Arc::new(RestCatalogService::new(backend.clone())),
            carts: Arc::new(KvCartsService::new(
                Arc::clone(&store),
                &config.storage.cart_key,
            )),
            orders: Arc::new(RestOrdersService::new(backend.clone())),
            suggestions: Arc::new(RestSuggestionsApi::new(backend)),
            sessions: Arc::new(SessionManager::new(
                auth,
                store,
                &config.storage.credential_key,
            )),
        })
    }
}
