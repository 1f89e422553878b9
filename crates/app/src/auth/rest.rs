//! REST auth client for the hosted provider.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::warn;

use crate::{backend::BackendHandle, storage::KeyValueStore};

use super::{errors::AuthError, models::Session, service::AuthClient};

/// Anonymous-session auth against the hosted provider, with the refresh
/// token cached in the local store.
pub struct RestAuthClient {
    backend: BackendHandle,
    cache: Arc<dyn KeyValueStore>,
    credential_key: String,
}

impl RestAuthClient {
    #[must_use]
    pub fn new(
        backend: BackendHandle,
        cache: Arc<dyn KeyValueStore>,
        credential_key: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            cache,
            credential_key: credential_key.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SessionRow {
    user_id: String,
    access_token: String,
    refresh_token: String,
}

#[async_trait]
impl AuthClient for RestAuthClient {
    async fn current_session(&self) -> Result<Session, AuthError> {
        let refresh_token = match self.cache.get(&self.credential_key).await {
            Ok(Some(token)) => token,
            // nothing cached reads the same as a dead session; the manager
            // will bootstrap
            Ok(None) => return Err(AuthError::InvalidCredentials),
            Err(error) => {
                warn!(%error, "failed to read cached credentials");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let response = self
            .backend
            .http()
            .post(self.backend.url("auth/refresh"))
            .headers(self.backend.auth_headers())
            .json(&serde_json::json!({ "refresh_token": refresh_token }))
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AuthError::InvalidCredentials);
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();

            return Err(AuthError::UnexpectedResponse(format!(
                "session refresh failed with status {status}: {text}"
            )));
        }

        let row: SessionRow = response.json().await?;

        self.remember(&row).await;

        Ok(Session::new(row.user_id, row.access_token))
    }

    async fn bootstrap_session(&self) -> Result<Session, AuthError> {
        let response = self
            .backend
            .http()
            .post(self.backend.url("auth/anonymous"))
            .headers(self.backend.auth_headers())
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();

            return Err(AuthError::UnexpectedResponse(format!(
                "session bootstrap failed with status {status}: {text}"
            )));
        }

        let row: SessionRow = response.json().await?;

        self.remember(&row).await;

        Ok(Session::new(row.user_id, row.access_token))
    }
}

impl RestAuthClient {
    /// Cache the refresh token; a failed write just means a fresh anonymous
    /// session next run.
    async fn remember(&self, row: &SessionRow) {
        if let Err(error) = self
            .cache
            .set(&self.credential_key, row.refresh_token.clone())
            .await
        {
            warn!(%error, "failed to cache session credentials");
        }
    }
}
