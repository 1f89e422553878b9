//! Suggestions service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SuggestionsApiError {
    /// The backend refused the write; the message is shown inline.
    #[error("{0}")]
    Rejected(String),

    #[error("suggestion write failed")]
    Http(#[from] reqwest::Error),
}
