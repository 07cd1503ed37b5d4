//! # HTTP Module
//!
//! Axum front door: parses inbound requests into descriptors for the
//! dispatcher and renders its envelopes.

pub mod server;

pub use server::{router, HttpServer};
