//! Auth service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::warn;

use crate::storage::KeyValueStore;

use super::{errors::AuthError, models::Session};

/// The hosted auth provider, as this app consumes it.
#[automock]
#[async_trait]
pub trait AuthClient: Send + Sync {
    /// Resolve the session for the locally cached credentials.
    async fn current_session(&self) -> Result<Session, AuthError>;

    /// Establish a fresh session from nothing, caching new credentials.
    async fn bootstrap_session(&self) -> Result<Session, AuthError>;
}

/// Session access with self-correcting recovery.
///
/// When the provider signals [`AuthError::InvalidCredentials`], the cached
/// credential state is cleared and the session bootstrap re-runs, instead of
/// leaving the storefront wedged on a dead session.
pub struct SessionManager {
    client: Arc<dyn AuthClient>,
    cache: Arc<dyn KeyValueStore>,
    credential_key: String,
}

impl SessionManager {
    #[must_use]
    pub fn new(
        client: Arc<dyn AuthClient>,
        cache: Arc<dyn KeyValueStore>,
        credential_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            cache,
            credential_key: credential_key.into(),
        }
    }

    /// A valid session, healing invalid cached credentials along the way.
    ///
    /// # Errors
    ///
    /// Returns the provider's error when neither the current session nor a
    /// fresh bootstrap succeeds.
    pub async fn ensure_session(&self) -> Result<Session, AuthError> {
        match self.client.current_session().await {
            Err(AuthError::InvalidCredentials) => {
                warn!("cached credentials rejected, clearing them and bootstrapping anew");

                if let Err(error) = self.cache.remove(&self.credential_key).await {
                    warn!(%error, "failed to clear cached credentials");
                }

                self.client.bootstrap_session().await
            }
            result => result,
        }
    }
}
