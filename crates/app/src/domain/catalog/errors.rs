//! Catalog service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product not found")]
    NotFound,

    #[error("catalog request failed")]
    Http(#[from] reqwest::Error),

    #[error("unexpected catalog response: {0}")]
    UnexpectedResponse(String),
}
