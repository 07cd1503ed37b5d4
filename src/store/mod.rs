//! # Table Store Module
//!
//! Contract for the external key-value/document table holding products,
//! plus an in-memory backend for tests and local runs.

pub mod client;
pub mod errors;
pub mod expression;
pub mod memory;

pub use client::{Item, StoreAck, TableStore};
pub use errors::{StoreError, StoreResult};
pub use expression::UpdateExpression;
pub use memory::MemoryTableStore;
