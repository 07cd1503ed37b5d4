//! # Store Errors
//!
//! Failures reported by the table collaborator. These carry the store's
//! original message and are propagated unchanged to the dispatcher.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Table store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The named table does not exist in the store
    #[error("table not found: {0}")]
    TableNotFound(String),

    /// A write carried an item without the primary key attribute
    #[error("item is missing the primary key attribute \"id\"")]
    MissingKey,

    /// The store was unreachable or failed internally
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_cause() {
        assert_eq!(
            StoreError::TableNotFound("products".to_string()).to_string(),
            "table not found: products"
        );
        assert!(StoreError::MissingKey.to_string().contains("id"));
    }
}
