use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::ItemId;

use crate::draft::ItemFields;

/// Items with fewer units than this are flagged as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// A tracked inventory record, as stored and as served over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i64,
    pub price: f64,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Materialize a record from validated fields plus the store-assigned identity.
    pub fn from_fields(id: ItemId, fields: ItemFields, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            quantity: fields.quantity,
            price: fields.price,
            category: fields.category,
            created_at,
        }
    }

    /// Full replace of every mutable field; `id` and `created_at` are kept.
    pub fn replace_fields(&mut self, fields: ItemFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.quantity = fields.quantity;
        self.price = fields.price;
        self.category = fields.category;
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }

    /// `quantity × price`.
    pub fn line_value(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}
