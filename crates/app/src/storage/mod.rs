//! Local persistent store
//!
//! String-keyed, string-valued storage mirroring the browser-local store the
//! storefront persists its cart and cached credentials into. Callers decide
//! how faults surface; the cart service deliberately swallows them.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::InMemoryStore;

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

/// Local store failure.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error")]
    Io(#[from] std::io::Error),

    #[error("storage encoding error")]
    Encoding(#[from] serde_json::Error),
}

/// One key-value store scoped to a single browsing session.
#[automock]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;

    /// Remove `key` entirely; removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
