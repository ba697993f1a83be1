use std::sync::Arc;

use async_trait::async_trait;

use stockroom_core::{DomainResult, ItemId};
use stockroom_inventory::{InventoryItem, ItemDraft};

/// Storage boundary for inventory records.
///
/// ## Atomicity
///
/// Every operation either fully succeeds (and is visible to every later `list`/`get`)
/// or fails with no state change. Implementations get there with a single SQL
/// statement or a single write-lock critical section per call.
///
/// ## Validation
///
/// The store is the single source of truth for validation: `insert` and `update`
/// run `ItemDraft::validate` before touching storage, so a missing name never
/// reaches the backend. For `update` validation happens before the existence check.
///
/// ## Identity
///
/// Ids are assigned by the store, strictly increasing, and never reused after delete.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Full snapshot, sorted by name ascending with ties in insertion order.
    async fn list(&self) -> DomainResult<Vec<InventoryItem>>;

    async fn get(&self, id: ItemId) -> DomainResult<InventoryItem>;

    /// Validate, coerce and persist a new record; stamps `id` and `created_at`.
    async fn insert(&self, draft: &ItemDraft) -> DomainResult<InventoryItem>;

    /// Full replace of every mutable field. Omitted fields become empty/zero.
    async fn update(&self, id: ItemId, draft: &ItemDraft) -> DomainResult<InventoryItem>;

    /// Permanent removal.
    async fn delete(&self, id: ItemId) -> DomainResult<()>;
}

#[async_trait]
impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    async fn list(&self) -> DomainResult<Vec<InventoryItem>> {
        (**self).list().await
    }

    async fn get(&self, id: ItemId) -> DomainResult<InventoryItem> {
        (**self).get(id).await
    }

    async fn insert(&self, draft: &ItemDraft) -> DomainResult<InventoryItem> {
        (**self).insert(draft).await
    }

    async fn update(&self, id: ItemId, draft: &ItemDraft) -> DomainResult<InventoryItem> {
        (**self).update(id, draft).await
    }

    async fn delete(&self, id: ItemId) -> DomainResult<()> {
        (**self).delete(id).await
    }
}
