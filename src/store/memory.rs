//! # In-Memory Table Store
//!
//! Backend for tests and local runs.
//!
//! In production, the `TableStore` handle would point at the managed table
//! service instead.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;

use super::client::{Item, StoreAck, TableStore};
use super::errors::{StoreError, StoreResult};
use super::expression::UpdateExpression;

/// Table data: table name -> (id -> item)
type Tables = HashMap<String, HashMap<String, Item>>;

/// In-memory table store
pub struct MemoryTableStore {
    tables: RwLock<Tables>,
}

impl MemoryTableStore {
    /// Create an empty store with no tables.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// Create a store with one pre-created table.
    pub fn with_table(name: &str) -> Self {
        let store = Self::new();
        store.create_table(name);
        store
    }

    /// Create a table, replacing any existing one with the same name.
    pub fn create_table(&self, name: &str) {
        if let Ok(mut tables) = self.tables.write() {
            tables.insert(name.to_string(), HashMap::new());
        }
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }

    fn key_of(item: &Item) -> StoreResult<String> {
        item.get("id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .ok_or(StoreError::MissingKey)
    }
}

impl Default for MemoryTableStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TableStore for MemoryTableStore {
    async fn put_item(&self, table: &str, item: Item) -> StoreResult<StoreAck> {
        let id = Self::key_of(&item)?;
        let mut tables = self.write()?;
        let rows = tables
            .get_mut(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;

        rows.insert(id, item);
        Ok(StoreAck { items_affected: 1 })
    }

    async fn get_item(&self, table: &str, id: &str) -> StoreResult<Option<Item>> {
        let tables = self.read()?;
        let rows = tables
            .get(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;

        Ok(rows.get(id).cloned())
    }

    async fn delete_item(&self, table: &str, id: &str) -> StoreResult<StoreAck> {
        let mut tables = self.write()?;
        let rows = tables
            .get_mut(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;

        let removed = rows.remove(id).is_some();
        Ok(StoreAck {
            items_affected: usize::from(removed),
        })
    }

    async fn update_item(
        &self,
        table: &str,
        id: &str,
        expression: UpdateExpression,
    ) -> StoreResult<StoreAck> {
        let mut tables = self.write()?;
        let rows = tables
            .get_mut(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;

        // Upsert semantics: an update against a missing key creates the item.
        let item = rows.entry(id.to_string()).or_insert_with(|| {
            let mut item = Item::new();
            item.insert("id".to_string(), Value::String(id.to_string()));
            item
        });

        for (field, value) in expression.assignments() {
            item.insert(field.to_string(), value.clone());
        }

        Ok(StoreAck { items_affected: 1 })
    }

    async fn scan(&self, table: &str) -> StoreResult<Vec<Item>> {
        let tables = self.read()?;
        let rows = tables
            .get(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;

        Ok(rows.values().cloned().collect())
    }

    async fn query_contains(
        &self,
        table: &str,
        id: &str,
        filter_field: &str,
        filter_value: &str,
    ) -> StoreResult<Vec<Item>> {
        let tables = self.read()?;
        let rows = tables
            .get(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;

        // Key-equality query returns at most one item; the filter then keeps
        // it only when the attribute contains the substring. Containment is
        // case-insensitive, so "Phone" matches "Smartphones".
        let needle = filter_value.to_lowercase();
        let matched = rows.get(id).filter(|item| {
            item.get(filter_field)
                .and_then(Value::as_str)
                .is_some_and(|attr| attr.to_lowercase().contains(&needle))
        });

        Ok(matched.cloned().into_iter().collect())
    }
}
