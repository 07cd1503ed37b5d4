//! product-api - HTTP CRUD facade over an external product table
//!
//! One dispatcher maps each inbound request onto a single table operation
//! and wraps the outcome in a response envelope.

pub mod config;
pub mod http;
pub mod product;
pub mod store;
