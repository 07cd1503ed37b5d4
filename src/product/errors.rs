//! # Product Operation Errors
//!
//! The failure taxonomy for the dispatcher and its six operations. Every
//! operation propagates failures here; the dispatcher is the single point
//! that converts them into error envelopes.

use axum::http::StatusCode;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for product operations
pub type ProductResult<T> = Result<T, ProductError>;

/// Product operation errors
#[derive(Debug, Error)]
pub enum ProductError {
    /// Request body is missing or not a JSON object
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// Update request carried an empty field mapping
    #[error("update requires at least one field")]
    EmptyUpdate,

    /// A required parameter was absent or empty
    #[error("missing required parameter: {0}")]
    MissingParam(&'static str),

    /// Method the dispatcher does not route
    #[error("unsupported route: \"{0}\"")]
    UnsupportedRoute(String),

    /// Failure reported by the table store
    #[error("store operation failed")]
    Store(#[from] StoreError),
}

impl ProductError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::EmptyUpdate => StatusCode::BAD_REQUEST,
            Self::MissingParam(_) => StatusCode::BAD_REQUEST,
            Self::UnsupportedRoute(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Rendered source chain, used as the error envelope's stack field.
    pub fn stack(&self) -> String {
        use std::error::Error;

        let mut rendered = self.to_string();
        let mut source = self.source();
        while let Some(err) = source {
            rendered.push_str("\n    caused by: ");
            rendered.push_str(&err.to_string());
            source = err.source();
        }
        rendered
    }
}
