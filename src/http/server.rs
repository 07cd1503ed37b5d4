//! # HTTP Server
//!
//! Binds the dispatcher to axum. All methods on the product routes funnel
//! into the dispatcher, so an unrecognized method reaches its
//! unsupported-route branch instead of being rejected by the router.

use std::collections::HashMap;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::Method,
    response::IntoResponse,
    routing::{any, get},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServiceConfig;
use crate::product::{Dispatcher, ProductRequest};
use crate::store::TableStore;

/// Shared state type
type SharedDispatcher<S> = Arc<Dispatcher<S>>;

/// Build the product router.
pub fn router<S: TableStore + 'static>(dispatcher: Dispatcher<S>) -> Router {
    let state = Arc::new(dispatcher);

    Router::new()
        .route("/health", get(health_handler))
        .route("/products", any(collection_handler))
        .route("/products/:id", any(item_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Liveness probe
async fn health_handler() -> &'static str {
    "ok"
}

/// Requests without a path id (`/products`)
async fn collection_handler<S: TableStore + 'static>(
    State(dispatcher): State<SharedDispatcher<S>>,
    method: Method,
    Query(query): Query<HashMap<String, String>>,
    body: String,
) -> impl IntoResponse {
    let request = descriptor(method, None, query, body);
    dispatcher.dispatch(&request).await
}

/// Requests carrying a path id (`/products/:id`)
async fn item_handler<S: TableStore + 'static>(
    State(dispatcher): State<SharedDispatcher<S>>,
    method: Method,
    Path(id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    body: String,
) -> impl IntoResponse {
    let request = descriptor(method, Some(id), query, body);
    dispatcher.dispatch(&request).await
}

/// Translate the parsed HTTP pieces into a request descriptor. Absent
/// parameter mappings stay absent; presence drives GET routing.
fn descriptor(
    method: Method,
    id: Option<String>,
    query: HashMap<String, String>,
    body: String,
) -> ProductRequest {
    let mut request = ProductRequest::new(method);
    if let Some(id) = id {
        request = request.with_path_param("id", &id);
    }
    for (name, value) in &query {
        request = request.with_query_param(name, value);
    }
    if !body.is_empty() {
        request = request.with_body(body);
    }
    request
}

/// HTTP server for the product API
pub struct HttpServer {
    config: ServiceConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server wiring the dispatcher under the given configuration.
    pub fn new<S: TableStore + 'static>(config: ServiceConfig, dispatcher: Dispatcher<S>) -> Self {
        let router = router(dispatcher);
        Self { config, router }
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

        let listener = TcpListener::bind(addr).await?;
        info!(%addr, table = %self.config.table_name, "product api listening");

        axum::serve(listener, self.router).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductService;
    use crate::store::MemoryTableStore;

    #[test]
    fn test_server_creation() {
        let store = Arc::new(MemoryTableStore::with_table("products"));
        let dispatcher = Dispatcher::new(ProductService::new(store, "products"));
        let server = HttpServer::new(ServiceConfig::default(), dispatcher);
        let _router = server.router();
    }

    #[test]
    fn test_descriptor_keeps_absent_params_absent() {
        let request = descriptor(Method::GET, None, HashMap::new(), String::new());
        assert!(request.path_params.is_none());
        assert!(request.query_params.is_none());
        assert!(request.body.is_none());
    }
}
