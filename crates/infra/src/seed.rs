//! Sample catalogue inserted on startup so a fresh (volatile) store is not empty.

use stockroom_core::DomainResult;
use stockroom_inventory::ItemDraft;

use crate::item_store::ItemStore;

/// `(name, description, quantity, price, category)`
const SAMPLE_ITEMS: &[(&str, &str, i64, f64, &str)] = &[
    ("Laptop", "15-inch MacBook Pro", 12, 1999.99, "Electronics"),
    ("Wireless Mouse", "Ergonomic wireless mouse", 45, 29.99, "Accessories"),
    ("USB-C Cable", "6ft USB-C charging cable", 78, 19.99, "Accessories"),
    ("Monitor Stand", "Adjustable monitor stand", 23, 89.99, "Furniture"),
    ("Keyboard", "Mechanical keyboard", 5, 149.99, "Electronics"),
];

pub fn sample_drafts() -> Vec<ItemDraft> {
    SAMPLE_ITEMS
        .iter()
        .map(|(name, description, quantity, price, category)| {
            ItemDraft::named(*name)
                .with_description(*description)
                .with_quantity(*quantity)
                .with_price(*price)
                .with_category(*category)
        })
        .collect()
}

/// Insert the sample catalogue; returns how many items were added.
pub async fn seed_sample_items(store: &dyn ItemStore) -> DomainResult<usize> {
    let drafts = sample_drafts();
    for draft in &drafts {
        store.insert(draft).await?;
    }
    tracing::info!(count = drafts.len(), "seeded sample inventory");
    Ok(drafts.len())
}
