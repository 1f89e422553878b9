//! REST suggestions client for the hosted backend.

use async_trait::async_trait;
use serde::Deserialize;

use crate::{backend::BackendHandle, domain::orders::OrderUuid};

use super::{errors::SuggestionsApiError, service::SuggestionsApi};

/// Suggestion writes against the hosted backend's REST surface.
#[derive(Debug, Clone)]
pub struct RestSuggestionsApi {
    backend: BackendHandle,
}

impl RestSuggestionsApi {
    #[must_use]
    pub fn new(backend: BackendHandle) -> Self {
        Self { backend }
    }
}

/// Error body the backend returns on a refused write.
#[derive(Debug, Deserialize)]
struct RejectionBody {
    message: String,
}

#[async_trait]
impl SuggestionsApi for RestSuggestionsApi {
    async fn save_suggestion(
        &self,
        order: OrderUuid,
        text: &str,
    ) -> Result<(), SuggestionsApiError> {
        let url = self.backend.url(&format!("orders/{order}/suggestion"));
        let body = serde_json::json!({ "suggestion": text });

        let response = self
            .backend
            .http()
            .patch(url)
            .headers(self.backend.auth_headers())
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<RejectionBody>(&body).map_or_else(
            |_| format!("suggestion write failed with status {status}: {body}"),
            |rejection| rejection.message,
        );

        Err(SuggestionsApiError::Rejected(message))
    }
}
