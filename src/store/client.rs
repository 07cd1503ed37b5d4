//! # Store Client Contract
//!
//! The table is an external collaborator reached over the network; this
//! trait is the seam. Implementations hold only connection configuration,
//! immutable after construction, so one handle is shared across all
//! invocations of the process.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::errors::StoreResult;
use super::expression::UpdateExpression;

/// A stored item: a mapping of attribute names to values.
pub type Item = serde_json::Map<String, Value>;

/// Raw acknowledgment returned by the store for write operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreAck {
    /// Number of items the write touched.
    pub items_affected: usize,
}

/// Operations the table store exposes, keyed by the primary key `id`.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Unconditional put: stores the full item, overwriting any existing
    /// item sharing its `id`. No precondition check is made.
    async fn put_item(&self, table: &str, item: Item) -> StoreResult<StoreAck>;

    /// Point lookup by primary key. Absence is `None`, not an error.
    async fn get_item(&self, table: &str, id: &str) -> StoreResult<Option<Item>>;

    /// Unconditional delete by primary key; acknowledges whether or not an
    /// item existed.
    async fn delete_item(&self, table: &str, id: &str) -> StoreResult<StoreAck>;

    /// Apply a field-assignment expression to the item with the given key,
    /// creating the item when absent.
    async fn update_item(
        &self,
        table: &str,
        id: &str,
        expression: UpdateExpression,
    ) -> StoreResult<StoreAck>;

    /// Full unbounded table scan.
    async fn scan(&self, table: &str) -> StoreResult<Vec<Item>>;

    /// Query by primary-key equality, keeping only items whose
    /// `filter_field` attribute contains `filter_value` as a substring.
    async fn query_contains(
        &self,
        table: &str,
        id: &str,
        filter_field: &str,
        filter_value: &str,
    ) -> StoreResult<Vec<Item>>;
}
