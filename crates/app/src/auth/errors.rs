//! Auth errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// The provider no longer accepts the stored credentials. The typed
    /// signal the self-correcting session recovery keys off.
    #[error("invalid or expired credentials")]
    InvalidCredentials,

    #[error("auth request failed")]
    Http(#[from] reqwest::Error),

    #[error("unexpected auth response: {0}")]
    UnexpectedResponse(String),
}
