use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use stockroom_core::{DomainError, DomainResult, ItemId};
use stockroom_inventory::{InventoryItem, ItemDraft};

use super::r#trait::ItemStore;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<ItemId, InventoryItem>,
    /// Highest id ever handed out; survives deletes so ids are never reused.
    last_id: i64,
}

/// In-memory item store.
///
/// Intended for tests/dev. Every mutation runs inside one write-lock section.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    table: RwLock<Table>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> DomainError {
    DomainError::storage("in-memory item store lock poisoned")
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn list(&self) -> DomainResult<Vec<InventoryItem>> {
        let table = self.table.read().map_err(poisoned)?;
        // BTreeMap iterates in id order and the sort is stable, so equal names keep
        // insertion order.
        let mut items: Vec<InventoryItem> = table.rows.values().cloned().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    async fn get(&self, id: ItemId) -> DomainResult<InventoryItem> {
        let table = self.table.read().map_err(poisoned)?;
        table.rows.get(&id).cloned().ok_or(DomainError::NotFound)
    }

    async fn insert(&self, draft: &ItemDraft) -> DomainResult<InventoryItem> {
        let fields = draft.validate()?;
        let mut table = self.table.write().map_err(poisoned)?;

        table.last_id += 1;
        let id = ItemId::new(table.last_id);
        let item = InventoryItem::from_fields(id, fields, Utc::now());
        table.rows.insert(id, item.clone());

        tracing::info!(item_id = %id, name = %item.name, "inventory item created");
        Ok(item)
    }

    async fn update(&self, id: ItemId, draft: &ItemDraft) -> DomainResult<InventoryItem> {
        let fields = draft.validate()?;
        let mut table = self.table.write().map_err(poisoned)?;

        let item = table.rows.get_mut(&id).ok_or(DomainError::NotFound)?;
        item.replace_fields(fields);

        tracing::info!(item_id = %id, "inventory item updated");
        Ok(item.clone())
    }

    async fn delete(&self, id: ItemId) -> DomainResult<()> {
        let mut table = self.table.write().map_err(poisoned)?;
        table.rows.remove(&id).ok_or(DomainError::NotFound)?;

        tracing::info!(item_id = %id, "inventory item deleted");
        Ok(())
    }
}
