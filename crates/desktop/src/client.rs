//! Session-local view of the inventory, kept in step with the service.
//!
//! The service stays the authority: every successful mutation is followed by a full
//! reload, and a failed call never touches the cached items.

use std::sync::{Mutex, MutexGuard, PoisonError};

use stockroom_core::ItemId;
use stockroom_inventory::{InventoryItem, ItemDraft};

use crate::api::{ApiError, InventoryApi};

#[derive(Debug, Clone, PartialEq)]
pub struct ClientState {
    /// Last successfully fetched collection.
    pub items: Vec<InventoryItem>,
    pub loading: bool,
    /// Last error message; cleared when the next operation starts.
    pub error: Option<String>,
}

/// A new session is loading until its first fetch settles.
impl Default for ClientState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

pub struct InventoryClient<A> {
    api: A,
    state: Mutex<ClientState>,
}

impl<A: InventoryApi> InventoryClient<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: Mutex::new(ClientState::default()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    // Guards are never held across an await, so a poisoned lock still holds
    // consistent state.
    fn state(&self) -> MutexGuard<'_, ClientState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> ClientState {
        self.state().clone()
    }

    /// Reload the full collection.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        {
            let mut state = self.state();
            state.loading = true;
            state.error = None;
        }

        let result = self.api.list().await;

        let mut state = self.state();
        state.loading = false;
        match result {
            Ok(items) => {
                tracing::debug!(count = items.len(), "inventory refreshed");
                state.items = items;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "inventory refresh failed");
                state.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn get(&self, id: ItemId) -> Result<InventoryItem, ApiError> {
        self.api.get(id).await
    }

    pub async fn create(&self, draft: &ItemDraft) -> Result<InventoryItem, ApiError> {
        self.clear_error();
        let result = self.api.create(draft).await;
        self.settle(result).await
    }

    pub async fn update(&self, id: ItemId, draft: &ItemDraft) -> Result<InventoryItem, ApiError> {
        self.clear_error();
        let result = self.api.update(id, draft).await;
        self.settle(result).await
    }

    pub async fn remove(&self, id: ItemId) -> Result<(), ApiError> {
        self.clear_error();
        let result = self.api.delete(id).await;
        self.settle(result).await
    }

    fn clear_error(&self) {
        self.state().error = None;
    }

    /// Record a mutation failure, or reload after a success.
    ///
    /// A failed reload only leaves its message in `error`; the mutation itself
    /// already happened.
    async fn settle<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        match result {
            Ok(value) => {
                let _ = self.refresh().await;
                Ok(value)
            }
            Err(e) => {
                tracing::warn!(error = %e, status = ?e.status(), "inventory mutation failed");
                self.state().error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
