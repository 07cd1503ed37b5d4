//! # Product Operations
//!
//! The six operations behind the dispatcher. Each one translates its inputs
//! into a single table-operation request and decodes the store's reply; the
//! table is the sole source of truth and nothing is cached here.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, error};
use uuid::Uuid;

use crate::store::{StoreAck, TableStore, UpdateExpression};

use super::errors::{ProductError, ProductResult};

/// Attribute the category containment filter inspects.
const CATEGORY_FIELD: &str = "category";

/// Executes product operations against the table store.
///
/// Holds only the store handle and the table name, both immutable after
/// construction, so one instance is shared across all invocations.
pub struct ProductService<S: TableStore> {
    store: Arc<S>,
    table: String,
}

impl<S: TableStore> ProductService<S> {
    pub fn new(store: Arc<S>, table: impl Into<String>) -> Self {
        Self {
            store,
            table: table.into(),
        }
    }

    /// Parse a request body as a product field mapping.
    fn parse_object(body: Option<&str>) -> ProductResult<Map<String, Value>> {
        let raw = body
            .ok_or_else(|| ProductError::MalformedBody("request body is required".to_string()))?;
        let value: Value = serde_json::from_str(raw)
            .map_err(|err| ProductError::MalformedBody(err.to_string()))?;

        match value {
            Value::Object(fields) => Ok(fields),
            _ => Err(ProductError::MalformedBody(
                "expected a JSON object".to_string(),
            )),
        }
    }

    /// Create: assign a fresh id to the parsed body and put it
    /// unconditionally, overwriting any item sharing that id. Returns the
    /// store's acknowledgment, not the created product.
    pub async fn create(&self, body: Option<&str>) -> ProductResult<StoreAck> {
        let mut product = Self::parse_object(body)?;

        let id = Uuid::new_v4().to_string();
        product.insert("id".to_string(), Value::String(id.clone()));
        debug!(%id, "creating product");

        let ack = self
            .store
            .put_item(&self.table, product)
            .await
            .inspect_err(|err| error!(%id, error = %err, "create failed"))?;
        Ok(ack)
    }

    /// Get-all: full unbounded scan. An empty table yields an empty
    /// sequence, never an empty object.
    pub async fn get_all(&self) -> ProductResult<Vec<Value>> {
        debug!("scanning all products");

        let items = self
            .store
            .scan(&self.table)
            .await
            .inspect_err(|err| error!(error = %err, "scan failed"))?;
        Ok(items.into_iter().map(Value::Object).collect())
    }

    /// Get-by-id: point lookup. Absence yields an empty object, not an
    /// error.
    pub async fn get(&self, id: &str) -> ProductResult<Value> {
        debug!(%id, "getting product");

        let item = self
            .store
            .get_item(&self.table, id)
            .await
            .inspect_err(|err| error!(%id, error = %err, "get failed"))?;
        Ok(Value::Object(item.unwrap_or_default()))
    }

    /// List-by-category: query by primary-key equality on `id`, then keep
    /// items whose `category` contains the given substring. Despite the
    /// name, this is keyed by id; the category is only a containment filter.
    pub async fn list_by_category(&self, id: &str, category: &str) -> ProductResult<Vec<Value>> {
        debug!(%id, %category, "listing products by category");

        let items = self
            .store
            .query_contains(&self.table, id, CATEGORY_FIELD, category)
            .await
            .inspect_err(|err| error!(%id, error = %err, "query failed"))?;
        Ok(items.into_iter().map(Value::Object).collect())
    }

    /// Update: set the named fields on the item with the given id through a
    /// single dynamic update expression. An empty field mapping would render
    /// a structurally invalid expression and is rejected before any store
    /// call.
    pub async fn update(&self, id: &str, body: Option<&str>) -> ProductResult<StoreAck> {
        let fields = Self::parse_object(body)?;
        if fields.is_empty() {
            return Err(ProductError::EmptyUpdate);
        }

        let expression = UpdateExpression::set_fields(&fields);
        debug!(%id, expression = expression.expression(), "updating product");

        let ack = self
            .store
            .update_item(&self.table, id, expression)
            .await
            .inspect_err(|err| error!(%id, error = %err, "update failed"))?;
        Ok(ack)
    }

    /// Delete-by-id: unconditional delete; acknowledged whether or not an
    /// item existed.
    pub async fn delete(&self, id: &str) -> ProductResult<StoreAck> {
        debug!(%id, "deleting product");

        let ack = self
            .store
            .delete_item(&self.table, id)
            .await
            .inspect_err(|err| error!(%id, error = %err, "delete failed"))?;
        Ok(ack)
    }
}
