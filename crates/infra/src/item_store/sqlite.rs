//! SQLite-backed item store.
//!
//! One table, one SQL statement per operation. Inserts and updates use `RETURNING`
//! so the stored row comes back from the same statement that wrote it.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;

use stockroom_core::{DomainError, DomainResult, ItemId};
use stockroom_inventory::{InventoryItem, ItemDraft};

use super::r#trait::ItemStore;

const COLUMNS: &str = "id, name, description, quantity, price, category, created_at";

/// SQLite item store.
///
/// ## In-memory databases
///
/// An SQLite `:memory:` database lives exactly as long as the connection that
/// created it. For such URLs the pool is pinned to a single connection that is never
/// idled out or recycled, so the table survives for the lifetime of the store.
///
/// ## Identity
///
/// `AUTOINCREMENT` keeps ids strictly increasing and prevents reuse after delete.
#[derive(Debug, Clone)]
pub struct SqliteItemStore {
    pool: SqlitePool,
}

impl SqliteItemStore {
    /// Connect to `url` (e.g. `sqlite::memory:` or `sqlite://inventory.db`) and make
    /// sure the `inventory` table exists.
    pub async fn connect(url: &str) -> DomainResult<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(storage_error)?
            .create_if_missing(true);

        let pool_options = if is_in_memory(url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(storage_error)?;

        let store = Self { pool };
        store.ensure_schema().await?;
        tracing::debug!(url, "sqlite item store ready");
        Ok(store)
    }

    /// Fresh, isolated in-memory database.
    pub async fn in_memory() -> DomainResult<Self> {
        Self::connect("sqlite::memory:").await
    }

    async fn ensure_schema(&self) -> DomainResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS inventory (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                name        TEXT NOT NULL,
                description TEXT,
                quantity    INTEGER NOT NULL DEFAULT 0,
                price       REAL NOT NULL DEFAULT 0,
                category    TEXT,
                created_at  TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;
        Ok(())
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

fn storage_error(err: sqlx::Error) -> DomainError {
    tracing::error!("sqlite item store failure: {err}");
    DomainError::storage(err.to_string())
}

fn item_from_row(row: &SqliteRow) -> DomainResult<InventoryItem> {
    let created_at: String = row.try_get("created_at").map_err(storage_error)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DomainError::storage(format!("invalid created_at timestamp: {e}")))?;

    Ok(InventoryItem {
        id: ItemId::new(row.try_get("id").map_err(storage_error)?),
        name: row.try_get("name").map_err(storage_error)?,
        description: row.try_get("description").map_err(storage_error)?,
        quantity: row.try_get("quantity").map_err(storage_error)?,
        price: row.try_get("price").map_err(storage_error)?,
        category: row.try_get("category").map_err(storage_error)?,
        created_at,
    })
}

#[async_trait]
impl ItemStore for SqliteItemStore {
    async fn list(&self) -> DomainResult<Vec<InventoryItem>> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM inventory ORDER BY name ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        rows.iter().map(item_from_row).collect()
    }

    async fn get(&self, id: ItemId) -> DomainResult<InventoryItem> {
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM inventory WHERE id = ?1"))
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;

        match row {
            Some(row) => item_from_row(&row),
            None => Err(DomainError::NotFound),
        }
    }

    async fn insert(&self, draft: &ItemDraft) -> DomainResult<InventoryItem> {
        let fields = draft.validate()?;
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true);

        let row = sqlx::query(&format!(
            r#"
            INSERT INTO inventory (name, description, quantity, price, category, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(fields.name.as_str())
        .bind(fields.description.as_deref())
        .bind(fields.quantity)
        .bind(fields.price)
        .bind(fields.category.as_deref())
        .bind(created_at.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error)?;

        let item = item_from_row(&row)?;
        tracing::info!(item_id = %item.id, name = %item.name, "inventory item created");
        Ok(item)
    }

    async fn update(&self, id: ItemId, draft: &ItemDraft) -> DomainResult<InventoryItem> {
        let fields = draft.validate()?;

        let row = sqlx::query(&format!(
            r#"
            UPDATE inventory
            SET name = ?1, description = ?2, quantity = ?3, price = ?4, category = ?5
            WHERE id = ?6
            RETURNING {COLUMNS}
            "#
        ))
        .bind(fields.name.as_str())
        .bind(fields.description.as_deref())
        .bind(fields.quantity)
        .bind(fields.price)
        .bind(fields.category.as_deref())
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        let item = match row {
            Some(row) => item_from_row(&row)?,
            None => return Err(DomainError::NotFound),
        };
        tracing::info!(item_id = %id, "inventory item updated");
        Ok(item)
    }

    async fn delete(&self, id: ItemId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM inventory WHERE id = ?1")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound);
        }
        tracing::info!(item_id = %id, "inventory item deleted");
        Ok(())
    }
}
