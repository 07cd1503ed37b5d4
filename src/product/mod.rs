//! # Product Module
//!
//! The request dispatcher and the six product operations it maps onto the
//! table store.

pub mod dispatcher;
pub mod errors;
pub mod handler;
pub mod request;
pub mod response;

pub use dispatcher::Dispatcher;
pub use errors::{ProductError, ProductResult};
pub use handler::ProductService;
pub use request::ProductRequest;
pub use response::{Envelope, EnvelopeBody, OperationResult};
