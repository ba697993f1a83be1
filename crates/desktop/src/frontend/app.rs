//! Dashboard: statistics, item list and the add/edit form over one client.

use async_trait::async_trait;

use stockroom_core::ItemId;
use stockroom_inventory::InventoryItem;

use crate::api::InventoryApi;
use crate::client::InventoryClient;
use crate::frontend::form::{FormField, ItemForm};
use crate::frontend::views::{ListView, StatsView};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this item?";

/// Blocking user interaction: confirmations and notifications.
#[async_trait]
pub trait Prompter: Send {
    async fn confirm(&mut self, message: &str) -> bool;
    async fn notify(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub title: &'static str,
    pub submit_label: &'static str,
    pub can_cancel: bool,
    pub form: ItemForm,
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub error_banner: Option<String>,
    pub stats: StatsView,
    pub list: ListView,
    pub form: FormView,
}

pub struct Dashboard<A> {
    client: InventoryClient<A>,
    editing: Option<InventoryItem>,
    form: ItemForm,
}

impl<A: InventoryApi> Dashboard<A> {
    pub fn new(client: InventoryClient<A>) -> Self {
        Self {
            client,
            editing: None,
            form: ItemForm::default(),
        }
    }

    pub fn client(&self) -> &InventoryClient<A> {
        &self.client
    }

    pub fn editing(&self) -> Option<&InventoryItem> {
        self.editing.as_ref()
    }

    pub fn view(&self) -> DashboardView {
        let state = self.client.snapshot();
        let editing = self.editing.is_some();

        DashboardView {
            error_banner: state.error.clone(),
            stats: StatsView::from_items(&state.items),
            list: ListView::from_state(&state),
            form: FormView {
                title: if editing { "Edit Inventory Item" } else { "Add New Item" },
                submit_label: if editing { "Update Item" } else { "Add to Inventory" },
                can_cancel: editing,
                form: self.form.clone(),
            },
        }
    }

    pub async fn refresh(&self) {
        // Failures surface through the error banner.
        let _ = self.client.refresh().await;
    }

    /// Start editing a listed item; returns false when the id is not listed.
    pub fn start_edit(&mut self, id: ItemId) -> bool {
        let Some(item) = self.client.snapshot().items.into_iter().find(|i| i.id == id) else {
            return false;
        };
        self.form = ItemForm::from_item(&item);
        self.editing = Some(item);
        true
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.form = ItemForm::default();
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Create or update from the form. Returns whether the call succeeded.
    pub async fn submit(&mut self, prompter: &mut dyn Prompter) -> bool {
        let draft = self.form.to_draft();
        let result = match &self.editing {
            Some(item) => self
                .client
                .update(item.id, &draft)
                .await
                .map(|_| "Item updated successfully!"),
            None => self
                .client
                .create(&draft)
                .await
                .map(|_| "Item added to inventory successfully!"),
        };

        match result {
            Ok(message) => {
                prompter.notify(message).await;
                self.cancel_edit();
                true
            }
            Err(e) => {
                prompter.notify(&format!("Error: {e}")).await;
                false
            }
        }
    }

    /// Delete after confirmation. Returns whether an item was deleted.
    pub async fn delete(&mut self, id: ItemId, prompter: &mut dyn Prompter) -> bool {
        if !prompter.confirm(DELETE_PROMPT).await {
            return false;
        }

        match self.client.remove(id).await {
            Ok(()) => {
                if self.editing.as_ref().is_some_and(|item| item.id == id) {
                    self.cancel_edit();
                }
                prompter.notify("Item deleted successfully!").await;
                true
            }
            Err(e) => {
                prompter.notify(&format!("Error: {e}")).await;
                false
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use std::collections::VecDeque;

    use async_trait::async_trait;

    use super::Prompter;

    /// Answers confirmations from a script and records every message shown.
    #[derive(Default)]
    pub struct ScriptedPrompter {
        pub answers: VecDeque<bool>,
        pub confirmations: Vec<String>,
        pub notifications: Vec<String>,
    }

    impl ScriptedPrompter {
        pub fn answering(answers: &[bool]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl Prompter for ScriptedPrompter {
        async fn confirm(&mut self, message: &str) -> bool {
            self.confirmations.push(message.to_string());
            self.answers.pop_front().unwrap_or(false)
        }

        async fn notify(&mut self, message: &str) {
            self.notifications.push(message.to_string());
        }
    }
}
