//! Orders service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    /// The backend refused the record; the message is shown to the user.
    #[error("{0}")]
    Rejected(String),

    #[error("order request failed")]
    Http(#[from] reqwest::Error),

    #[error("unexpected order response: {0}")]
    UnexpectedResponse(String),
}
