//! Display models derived from the client state. Nothing here mutates anything.

use stockroom_core::ItemId;
use stockroom_inventory::{InventoryItem, InventoryStats};

use crate::client::ClientState;
use crate::frontend::format::format_currency;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub item_count: usize,
    pub total_value: String,
    pub low_stock_count: usize,
    /// Highlight the low-stock figure.
    pub warning: bool,
}

impl StatsView {
    pub fn from_items(items: &[InventoryItem]) -> Self {
        let stats = InventoryStats::from_items(items);
        Self {
            item_count: stats.item_count,
            total_value: format_currency(stats.total_value),
            low_stock_count: stats.low_stock_count,
            warning: stats.has_low_stock(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i64,
    pub price: String,
    pub line_value: String,
    pub category: Option<String>,
    pub low_stock: bool,
}

impl From<&InventoryItem> for ItemCard {
    fn from(item: &InventoryItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            quantity: item.quantity,
            price: format_currency(item.price),
            line_value: format_currency(item.line_value()),
            category: item.category.clone(),
            low_stock: item.is_low_stock(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Empty,
    Items(Vec<ItemCard>),
}

impl ListView {
    pub fn from_state(state: &ClientState) -> Self {
        if state.loading {
            ListView::Loading
        } else if state.items.is_empty() {
            ListView::Empty
        } else {
            ListView::Items(state.items.iter().map(ItemCard::from).collect())
        }
    }
}
