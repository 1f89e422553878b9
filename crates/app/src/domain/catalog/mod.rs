//! Catalog read access.

mod errors;
mod rest;
mod service;

pub use errors::CatalogError;
pub use rest::RestCatalogService;
pub use service::{CatalogService, MockCatalogService};
