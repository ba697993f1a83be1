//! Contract tests shared by every `ItemStore` backend.
//!
//! Each check is written once against `&dyn ItemStore` and instantiated for the
//! SQLite and in-memory implementations by `store_contract!`.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;
    use proptest::prelude::*;
    use serde_json::json;

    use stockroom_core::{DomainError, ItemId};
    use stockroom_inventory::ItemDraft;

    use crate::config::{StoreBackend, StoreConfig};
    use crate::item_store::{self, InMemoryItemStore, ItemStore, SqliteItemStore};
    use crate::seed;

    fn names(items: &[stockroom_inventory::InventoryItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    async fn ids_strictly_increase(store: &dyn ItemStore) {
        let mut last = 0;
        for name in ["a", "b", "c", "d"] {
            let item = store.insert(&ItemDraft::named(name)).await.unwrap();
            assert!(item.id.get() > last, "id {} not above {}", item.id, last);
            last = item.id.get();
        }
    }

    async fn ids_are_not_reused_after_delete(store: &dyn ItemStore) {
        let a = store.insert(&ItemDraft::named("a")).await.unwrap();
        let b = store.insert(&ItemDraft::named("b")).await.unwrap();
        store.delete(b.id).await.unwrap();
        let c = store.insert(&ItemDraft::named("c")).await.unwrap();
        assert!(c.id > b.id);
        assert!(c.id > a.id);
    }

    async fn list_is_sorted_by_name(store: &dyn ItemStore) {
        store.insert(&ItemDraft::named("Bee")).await.unwrap();
        store.insert(&ItemDraft::named("Cat")).await.unwrap();
        store.insert(&ItemDraft::named("Ant")).await.unwrap();

        let items = store.list().await.unwrap();
        assert_eq!(names(&items), vec!["Ant", "Bee", "Cat"]);
    }

    async fn equal_names_keep_insertion_order(store: &dyn ItemStore) {
        let first = store.insert(&ItemDraft::named("Same").with_quantity(1)).await.unwrap();
        store.insert(&ItemDraft::named("Aaa")).await.unwrap();
        let second = store.insert(&ItemDraft::named("Same").with_quantity(2)).await.unwrap();

        let items = store.list().await.unwrap();
        let same: Vec<ItemId> = items.iter().filter(|i| i.name == "Same").map(|i| i.id).collect();
        assert_eq!(same, vec![first.id, second.id]);
    }

    async fn list_is_idempotent(store: &dyn ItemStore) {
        seed::seed_sample_items(store).await.unwrap();
        let first = store.list().await.unwrap();
        let second = store.list().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    async fn insert_without_name_changes_nothing(store: &dyn ItemStore) {
        store.insert(&ItemDraft::named("Keep")).await.unwrap();

        for draft in [ItemDraft::default(), ItemDraft::named("").with_quantity(3)] {
            let err = store.insert(&draft).await.unwrap_err();
            assert_eq!(err, DomainError::validation("Name is required"));
        }
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    async fn round_trip_preserves_fields(store: &dyn ItemStore) {
        let started = Utc::now();
        let created = store
            .insert(&ItemDraft::named("Widget").with_quantity(5).with_price(2.5))
            .await
            .unwrap();

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.quantity, 5);
        assert_eq!(fetched.price, 2.5);
        assert_eq!(fetched.description, None);
        assert_eq!(fetched.category, None);
        assert!(fetched.created_at >= started);
    }

    async fn string_numbers_are_coerced(store: &dyn ItemStore) {
        let draft = ItemDraft {
            name: Some("Cable".into()),
            quantity: Some(json!("78")),
            price: Some(json!("not a price")),
            ..ItemDraft::default()
        };
        let item = store.insert(&draft).await.unwrap();
        assert_eq!(item.quantity, 78);
        assert_eq!(item.price, 0.0);
    }

    async fn update_replaces_every_field(store: &dyn ItemStore) {
        let created = store
            .insert(
                &ItemDraft::named("Laptop")
                    .with_description("15-inch")
                    .with_quantity(12)
                    .with_price(1999.99)
                    .with_category("Electronics"),
            )
            .await
            .unwrap();

        let updated = store
            .update(created.id, &ItemDraft::named("Laptop Pro"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "Laptop Pro");
        assert_eq!(updated.description, None);
        assert_eq!(updated.quantity, 0);
        assert_eq!(updated.price, 0.0);
        assert_eq!(updated.category, None);
        assert_eq!(store.get(created.id).await.unwrap(), updated);
    }

    async fn update_missing_item_is_not_found(store: &dyn ItemStore) {
        let kept = store.insert(&ItemDraft::named("Kept")).await.unwrap();
        let before = store.list().await.unwrap();

        let err = store
            .update(ItemId::new(kept.id.get() + 100), &ItemDraft::named("Ghost"))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);
        assert_eq!(store.list().await.unwrap(), before);
    }

    async fn update_validates_before_existence(store: &dyn ItemStore) {
        let err = store.update(ItemId::new(9999), &ItemDraft::default()).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let item = store.insert(&ItemDraft::named("Mouse")).await.unwrap();
        let err = store.update(item.id, &ItemDraft::named("")).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(store.get(item.id).await.unwrap().name, "Mouse");
    }

    async fn delete_is_permanent(store: &dyn ItemStore) {
        let item = store.insert(&ItemDraft::named("Stand")).await.unwrap();
        store.delete(item.id).await.unwrap();

        assert_eq!(store.get(item.id).await.unwrap_err(), DomainError::NotFound);
        assert_eq!(store.delete(item.id).await.unwrap_err(), DomainError::NotFound);
        assert!(store.list().await.unwrap().is_empty());
    }

    macro_rules! store_contract {
        ($backend:ident, $make:expr) => {
            mod $backend {
                use super::*;

                async fn store() -> Arc<dyn ItemStore> {
                    $make
                }

                #[tokio::test]
                async fn ids_strictly_increase() {
                    super::ids_strictly_increase(&*store().await).await;
                }

                #[tokio::test]
                async fn ids_are_not_reused_after_delete() {
                    super::ids_are_not_reused_after_delete(&*store().await).await;
                }

                #[tokio::test]
                async fn list_is_sorted_by_name() {
                    super::list_is_sorted_by_name(&*store().await).await;
                }

                #[tokio::test]
                async fn equal_names_keep_insertion_order() {
                    super::equal_names_keep_insertion_order(&*store().await).await;
                }

                #[tokio::test]
                async fn list_is_idempotent() {
                    super::list_is_idempotent(&*store().await).await;
                }

                #[tokio::test]
                async fn insert_without_name_changes_nothing() {
                    super::insert_without_name_changes_nothing(&*store().await).await;
                }

                #[tokio::test]
                async fn round_trip_preserves_fields() {
                    super::round_trip_preserves_fields(&*store().await).await;
                }

                #[tokio::test]
                async fn string_numbers_are_coerced() {
                    super::string_numbers_are_coerced(&*store().await).await;
                }

                #[tokio::test]
                async fn update_replaces_every_field() {
                    super::update_replaces_every_field(&*store().await).await;
                }

                #[tokio::test]
                async fn update_missing_item_is_not_found() {
                    super::update_missing_item_is_not_found(&*store().await).await;
                }

                #[tokio::test]
                async fn update_validates_before_existence() {
                    super::update_validates_before_existence(&*store().await).await;
                }

                #[tokio::test]
                async fn delete_is_permanent() {
                    super::delete_is_permanent(&*store().await).await;
                }
            }
        };
    }

    store_contract!(sqlite, Arc::new(SqliteItemStore::in_memory().await.unwrap()));
    store_contract!(in_memory, Arc::new(InMemoryItemStore::new()));

    #[tokio::test]
    async fn separate_sqlite_stores_are_isolated() {
        let a = SqliteItemStore::in_memory().await.unwrap();
        let b = SqliteItemStore::in_memory().await.unwrap();
        a.insert(&ItemDraft::named("only in a")).await.unwrap();

        assert_eq!(a.list().await.unwrap().len(), 1);
        assert!(b.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn connect_honours_backend_choice() {
        for backend in [StoreBackend::Sqlite, StoreBackend::Memory] {
            let cfg = StoreConfig {
                backend,
                ..StoreConfig::default()
            };
            let store = item_store::connect(&cfg).await.unwrap();
            let item = store.insert(&ItemDraft::named("x")).await.unwrap();
            assert_eq!(store.get(item.id).await.unwrap().name, "x");
        }
    }

    proptest! {
        #[test]
        fn any_insert_sequence_lists_sorted_with_increasing_ids(
            names in proptest::collection::vec("[a-zA-Z ]{1,8}", 1..20)
        ) {
            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            rt.block_on(async {
                let store = InMemoryItemStore::new();
                let mut last = 0;
                for name in &names {
                    let draft = ItemDraft::named(name.clone());
                    match store.insert(&draft).await {
                        Ok(item) => {
                            prop_assert!(item.id.get() > last);
                            last = item.id.get();
                        }
                        // whitespace-only names are rejected
                        Err(e) => prop_assert!(matches!(e, DomainError::Validation(_))),
                    }
                }

                let items = store.list().await.unwrap();
                for pair in items.windows(2) {
                    prop_assert!(
                        pair[0].name < pair[1].name
                            || (pair[0].name == pair[1].name && pair[0].id < pair[1].id)
                    );
                }
                Ok(())
            })?;
        }
    }
}
