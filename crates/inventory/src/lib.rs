//! Inventory domain module.
//!
//! This crate contains the inventory record, the request draft with its coercion and
//! validation rules, and the derived values (low stock, line value, statistics),
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod draft;
pub mod item;
pub mod stats;

pub use draft::{ItemDraft, ItemFields, coerce_price, coerce_quantity};
pub use item::{InventoryItem, LOW_STOCK_THRESHOLD};
pub use stats::InventoryStats;
