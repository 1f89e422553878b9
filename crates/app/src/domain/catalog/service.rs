//! Catalog service.

use async_trait::async_trait;
use mockall::automock;
use tuckshop::products::{Product, ProductId};

use super::errors::CatalogError;

/// Read-only view of the hosted product catalog.
#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// All products currently offered for sale.
    async fn active_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Look up a single active product by id.
    async fn product(&self, id: &ProductId) -> Result<Product, CatalogError>;
}
