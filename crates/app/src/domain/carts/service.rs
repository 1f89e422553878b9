//! Carts service.
//!
//! Persists the cart line sequence into the local key-value store. Every
//! operation is fail-soft: a missing key, malformed payload, or store fault
//! degrades to an empty cart and is logged, never surfaced to the caller.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::warn;
use tuckshop::{
    cart::{CartLine, merge},
    products::Product,
};

use crate::storage::KeyValueStore;

/// One browsing session's cart.
#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Read the persisted cart; empty on absence or any fault.
    async fn load(&self) -> Vec<CartLine>;

    /// Persist the full line sequence, overwriting prior state.
    async fn save(&self, lines: Vec<CartLine>);

    /// Remove the persisted cart entirely.
    async fn clear(&self);

    /// Fold a quantity delta into the persisted cart and return the result.
    async fn adjust(&self, product: Product, delta: i64) -> Vec<CartLine>;
}

/// Cart service over a local key-value store.
#[derive(Clone)]
pub struct KvCartsService {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl KvCartsService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

#[async_trait]
impl CartsService for KvCartsService {
    async fn load(&self) -> Vec<CartLine> {
        match self.store.get(&self.key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(lines) => lines,
                Err(error) => {
                    warn!(%error, "stored cart is malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(error) => {
                warn!(%error, "failed to read stored cart, starting empty");
                Vec::new()
            }
        }
    }

    async fn save(&self, lines: Vec<CartLine>) {
        let payload = match serde_json::to_string(&lines) {
            Ok(payload) => payload,
            Err(error) => {
                warn!(%error, "failed to encode cart, keeping prior state");
                return;
            }
        };

        if let Err(error) = self.store.set(&self.key, payload).await {
            warn!(%error, "failed to persist cart");
        }
    }

    async fn clear(&self) {
        if let Err(error) = self.store.remove(&self.key).await {
            warn!(%error, "failed to clear stored cart");
        }
    }

    async fn adjust(&self, product: Product, delta: i64) -> Vec<CartLine> {
        let lines = self.load().await;
        let next = merge(&lines, &product, delta);

        self.save(next.clone()).await;

        next
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use tuckshop::products::ProductId;

    use crate::storage::{InMemoryStore, MockKeyValueStore, StorageError};

    use super::*;

    fn product(id: &str, price_cents: u64) -> Product {
        Product {
            id: ProductId::from(id),
            name: id.to_owned(),
            category: "snacks".to_owned(),
            price_cents,
            stock_qty: 5,
            is_active: true,
            photo_url: None,
        }
    }

    fn service_over_memory() -> KvCartsService {
        KvCartsService::new(Arc::new(InMemoryStore::new()), "tuckshop.cart")
    }

    #[tokio::test]
    async fn load_on_a_fresh_store_is_empty() {
        let carts = service_over_memory();

        assert!(carts.load().await.is_empty());
    }

    #[tokio::test]
    async fn adjust_persists_across_loads() {
        let carts = service_over_memory();

        let after_add = carts.adjust(product("cola", 250), 2).await;
        assert_eq!(after_add.len(), 1);

        let reloaded = carts.load().await;
        assert_eq!(reloaded, after_add);
    }

    #[tokio::test]
    async fn clear_removes_the_persisted_cart() {
        let carts = service_over_memory();
        carts.adjust(product("cola", 250), 1).await;

        carts.clear().await;

        assert!(carts.load().await.is_empty());
    }

    #[tokio::test]
    async fn the_wire_encoding_is_a_list_of_product_qty_pairs() -> TestResult {
        let store = Arc::new(InMemoryStore::new());
        let carts = KvCartsService::new(Arc::clone(&store) as Arc<dyn KeyValueStore>, "cart");

        carts.save(vec![CartLine {
            product: product("cola", 250),
            qty: 2,
        }])
        .await;

        let raw = store.get("cart").await?.ok_or("cart was not persisted")?;
        let parsed: serde_json::Value = serde_json::from_str(&raw)?;

        assert_eq!(parsed.pointer("/0/qty"), Some(&serde_json::json!(2)));
        assert_eq!(
            parsed.pointer("/0/product/id"),
            Some(&serde_json::json!("cola"))
        );

        Ok(())
    }

    #[tokio::test]
    async fn malformed_stored_state_degrades_to_an_empty_cart() -> TestResult {
        let store = Arc::new(InMemoryStore::new());
        store.set("cart", "{not json".to_owned()).await?;

        let carts = KvCartsService::new(Arc::clone(&store) as Arc<dyn KeyValueStore>, "cart");

        assert!(carts.load().await.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn a_failing_store_never_raises() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_get()
            .returning(|_| Err(StorageError::Io(std::io::Error::other("disk gone"))));
        store
            .expect_set()
            .returning(|_, _| Err(StorageError::Io(std::io::Error::other("disk gone"))));
        store
            .expect_remove()
            .returning(|_| Err(StorageError::Io(std::io::Error::other("disk gone"))));

        let carts = KvCartsService::new(Arc::new(store), "cart");

        assert!(carts.load().await.is_empty());
        carts.save(vec![]).await;
        carts.clear().await;
        assert_eq!(carts.adjust(product("cola", 250), 1).await.len(), 1);
    }
}
