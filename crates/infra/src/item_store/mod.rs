//! Inventory item storage boundary.
//!
//! The API layer depends only on the `ItemStore` trait; the concrete backend is
//! chosen once at startup from `StoreConfig`.

pub mod in_memory;
pub mod sqlite;
pub mod r#trait;

use std::sync::Arc;

use stockroom_core::DomainResult;

use crate::config::{StoreBackend, StoreConfig};

pub use in_memory::InMemoryItemStore;
pub use r#trait::ItemStore;
pub use sqlite::SqliteItemStore;

/// Build the configured store, owned by the caller and shared through an `Arc`.
pub async fn connect(config: &StoreConfig) -> DomainResult<Arc<dyn ItemStore>> {
    let store: Arc<dyn ItemStore> = match config.backend {
        StoreBackend::Sqlite => Arc::new(SqliteItemStore::connect(&config.database_url).await?),
        StoreBackend::Memory => Arc::new(InMemoryItemStore::new()),
    };
    tracing::info!(backend = config.backend.as_str(), "item store connected");
    Ok(store)
}
