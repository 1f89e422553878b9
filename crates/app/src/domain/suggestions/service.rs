//! Suggestions service.

use async_trait::async_trait;
use mockall::automock;

use crate::domain::orders::OrderUuid;

use super::errors::SuggestionsApiError;

/// Remote write endpoint for an order's free-text suggestion.
#[automock]
#[async_trait]
pub trait SuggestionsApi: Send + Sync {
    /// Replace the suggestion stored against `order`.
    async fn save_suggestion(
        &self,
        order: OrderUuid,
        text: &str,
    ) -> Result<(), SuggestionsApiError>;
}
