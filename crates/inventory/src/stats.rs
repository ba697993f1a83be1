//! Aggregate statistics over a collection snapshot (computed on demand, never stored).

use serde::Serialize;

use crate::item::InventoryItem;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct InventoryStats {
    pub item_count: usize,
    /// Sum of line values.
    pub total_value: f64,
    pub low_stock_count: usize,
}

impl InventoryStats {
    pub fn from_items(items: &[InventoryItem]) -> Self {
        items.iter().fold(Self::default(), |acc, item| Self {
            item_count: acc.item_count + 1,
            total_value: acc.total_value + item.line_value(),
            low_stock_count: acc.low_stock_count + usize::from(item.is_low_stock()),
        })
    }

    pub fn has_low_stock(&self) -> bool {
        self.low_stock_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ItemDraft;
    use chrono::Utc;
    use stockroom_core::ItemId;

    fn item(id: i64, quantity: i64, price: f64) -> InventoryItem {
        let fields = ItemDraft::named(format!("item-{id}"))
            .with_quantity(quantity)
            .with_price(price)
            .validate()
            .unwrap();
        InventoryItem::from_fields(ItemId::new(id), fields, Utc::now())
    }

    #[test]
    fn totals_and_low_stock_count() {
        let stats = InventoryStats::from_items(&[item(1, 2, 10.0), item(2, 20, 1.0)]);
        assert_eq!(stats.item_count, 2);
        assert_eq!(stats.total_value, 40.0);
        assert_eq!(stats.low_stock_count, 1);
        assert!(stats.has_low_stock());
    }

    #[test]
    fn empty_collection() {
        let stats = InventoryStats::from_items(&[]);
        assert_eq!(stats, InventoryStats::default());
        assert!(!stats.has_low_stock());
    }
}
