//! Infrastructure layer: item storage backends, seed data, configuration.

pub mod config;
pub mod item_store;
pub mod seed;

mod integration_tests;

pub use config::{ConfigError, StoreBackend, StoreConfig};
pub use item_store::{InMemoryItemStore, ItemStore, SqliteItemStore};
