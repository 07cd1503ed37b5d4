//! # Request Dispatcher
//!
//! Selects exactly one operation from the request's method and parameter
//! presence, runs it, and wraps the outcome in a response envelope. Every
//! branch terminates: a GET resolves to one of the three read operations
//! and nothing else ever runs after it.

use tracing::{error, info};

use crate::store::TableStore;

use super::errors::{ProductError, ProductResult};
use super::handler::ProductService;
use super::request::ProductRequest;
use super::response::{Envelope, OperationResult};

/// Routes inbound requests onto product operations.
pub struct Dispatcher<S: TableStore> {
    service: ProductService<S>,
}

impl<S: TableStore> Dispatcher<S> {
    pub fn new(service: ProductService<S>) -> Self {
        Self { service }
    }

    /// Route one request and always yield an envelope. Failures are
    /// converted here; none propagate to the caller.
    pub async fn dispatch(&self, request: &ProductRequest) -> Envelope {
        info!(method = %request.method, "handling request");

        match self.route(request).await {
            Ok(result) => {
                info!(method = %request.method, "operation finished");
                Envelope::success(&request.method, result)
            }
            Err(err) => {
                error!(method = %request.method, error = %err, "operation failed");
                Envelope::error(&err)
            }
        }
    }

    async fn route(&self, request: &ProductRequest) -> ProductResult<OperationResult> {
        match request.method.as_str() {
            "GET" => {
                if request.has_query_params() {
                    let id = Self::require_path_id(request)?;
                    let category = request
                        .query_param("category")
                        .filter(|category| !category.is_empty())
                        .ok_or(ProductError::MissingParam("category"))?;
                    let items = self.service.list_by_category(id, category).await?;
                    Ok(OperationResult::Items(items))
                } else if request.has_path_params() {
                    let id = Self::require_path_id(request)?;
                    Ok(OperationResult::Item(self.service.get(id).await?))
                } else {
                    Ok(OperationResult::Items(self.service.get_all().await?))
                }
            }
            "POST" => {
                let ack = self.service.create(request.body.as_deref()).await?;
                Ok(OperationResult::Ack(ack))
            }
            "DELETE" => {
                let id = Self::require_path_id(request)?;
                Ok(OperationResult::Ack(self.service.delete(id).await?))
            }
            "PUT" => {
                let id = Self::require_path_id(request)?;
                let ack = self.service.update(id, request.body.as_deref()).await?;
                Ok(OperationResult::Ack(ack))
            }
            other => Err(ProductError::UnsupportedRoute(other.to_string())),
        }
    }

    fn require_path_id(request: &ProductRequest) -> ProductResult<&str> {
        request
            .path_param("id")
            .filter(|id| !id.is_empty())
            .ok_or(ProductError::MissingParam("id"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::response::EnvelopeBody;
    use crate::store::MemoryTableStore;
    use axum::http::Method;
    use std::sync::Arc;

    const TABLE: &str = "products";

    fn dispatcher() -> Dispatcher<MemoryTableStore> {
        let store = Arc::new(MemoryTableStore::with_table(TABLE));
        Dispatcher::new(ProductService::new(store, TABLE))
    }

    fn error_msg(envelope: &Envelope) -> String {
        match &envelope.body {
            EnvelopeBody::Error { error_msg, .. } => error_msg.clone(),
            EnvelopeBody::Success { .. } => panic!("expected an error envelope"),
        }
    }

    #[tokio::test]
    async fn test_unrecognized_method_is_rejected() {
        let dispatcher = dispatcher();
        let request = ProductRequest::new(Method::PATCH);

        let envelope = dispatcher.dispatch(&request).await;
        assert_eq!(envelope.status_code, 405);
        assert_eq!(error_msg(&envelope), "unsupported route: \"PATCH\"");
    }

    #[tokio::test]
    async fn test_delete_without_id_is_rejected() {
        let dispatcher = dispatcher();
        let request = ProductRequest::new(Method::DELETE);

        let envelope = dispatcher.dispatch(&request).await;
        assert_eq!(envelope.status_code, 400);
        assert_eq!(error_msg(&envelope), "missing required parameter: id");
    }

    #[tokio::test]
    async fn test_category_listing_requires_category_value() {
        let dispatcher = dispatcher();
        let request = ProductRequest::new(Method::GET)
            .with_path_param("id", "42")
            .with_query_param("category", "");

        let envelope = dispatcher.dispatch(&request).await;
        assert_eq!(envelope.status_code, 400);
        assert_eq!(error_msg(&envelope), "missing required parameter: category");
    }

    #[tokio::test]
    async fn test_empty_id_is_rejected() {
        let dispatcher = dispatcher();
        let request = ProductRequest::new(Method::GET).with_path_param("id", "");

        let envelope = dispatcher.dispatch(&request).await;
        assert_eq!(envelope.status_code, 400);
    }

    #[tokio::test]
    async fn test_failures_become_envelopes_not_panics() {
        let store = Arc::new(MemoryTableStore::new());
        let dispatcher = Dispatcher::new(ProductService::new(store, "missing"));

        let envelope = dispatcher.dispatch(&ProductRequest::new(Method::GET)).await;
        assert_eq!(envelope.status_code, 500);
        assert!(!envelope.is_success());
    }
}
