//! REST catalog client for the hosted backend.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tuckshop::products::{Product, ProductId};

use crate::backend::BackendHandle;

use super::{errors::CatalogError, service::CatalogService};

/// Catalog reads against the hosted backend's REST surface.
#[derive(Debug, Clone)]
pub struct RestCatalogService {
    backend: BackendHandle,
}

impl RestCatalogService {
    #[must_use]
    pub fn new(backend: BackendHandle) -> Self {
        Self { backend }
    }

    fn http(&self) -> &Client {
        self.backend.http()
    }
}

#[async_trait]
impl CatalogService for RestCatalogService {
    async fn active_products(&self) -> Result<Vec<Product>, CatalogError> {
        let url = self.backend.url("products");

        let response = self
            .http()
            .get(url)
            .query(&[("active", "true")])
            .headers(self.backend.auth_headers())
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(CatalogError::UnexpectedResponse(format!(
                "catalog listing failed with status {status}: {text}"
            )));
        }

        Ok(response.json().await?)
    }

    async fn product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        let url = self.backend.url(&format!("products/{id}"));

        let response = self
            .http()
            .get(url)
            .headers(self.backend.auth_headers())
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(CatalogError::UnexpectedResponse(format!(
                "product lookup failed with status {status}: {text}"
            )));
        }

        let product: Product = response.json().await?;

        if product.is_active {
            Ok(product)
        } else {
            Err(CatalogError::NotFound)
        }
    }
}
