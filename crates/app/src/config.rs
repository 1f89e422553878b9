//! Application configuration.

use std::{path::PathBuf, time::Duration};

use clap::Args;

/// Hosted backend connection settings.
#[derive(Debug, Args)]
pub struct BackendConfig {
    /// Backend base URL
    #[arg(long, env = "TUCKSHOP_BACKEND_URL", default_value = "http://localhost:8000")]
    pub backend_url: String,

    /// Backend API key
    #[arg(long, env = "TUCKSHOP_API_KEY", default_value = "anonymous", hide_env_values = true)]
    pub api_key: String,
}

/// Local store settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// File the local key-value store lives in
    #[arg(long, env = "TUCKSHOP_STORE_PATH", default_value = ".tuckshop/store.json")]
    pub store_path: PathBuf,

    /// Key the cart line sequence is persisted under
    #[arg(long, env = "TUCKSHOP_CART_KEY", default_value = "tuckshop.cart")]
    pub cart_key: String,

    /// Key the cached session credentials are persisted under
    #[arg(long, env = "TUCKSHOP_CREDENTIAL_KEY", default_value = "tuckshop.session")]
    pub credential_key: String,
}

/// Suggestion autosave settings.
#[derive(Debug, Args)]
pub struct AutosaveConfig {
    /// Quiet period after the last keystroke before a save fires, in
    /// milliseconds
    #[arg(long, env = "TUCKSHOP_DEBOUNCE_MS", default_value = "600")]
    pub debounce_ms: u64,
}

impl AutosaveConfig {
    /// The debounce window as a duration.
    #[must_use]
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Everything the storefront needs to run.
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Hosted backend settings.
    #[command(flatten)]
    pub backend: BackendConfig,

    /// Local store settings.
    #[command(flatten)]
    pub storage: StorageConfig,

    /// Suggestion autosave settings.
    #[command(flatten)]
    pub autosave: AutosaveConfig,
}
