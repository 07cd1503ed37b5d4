//! HTTP Round-Trip Tests
//!
//! Drives the axum router in-process and checks that every invocation
//! produces a structured envelope with the right status and shape.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use product_api::http::router;
use product_api::product::{Dispatcher, ProductService};
use product_api::store::{MemoryTableStore, TableStore};

const TABLE: &str = "products";

fn app() -> (Arc<MemoryTableStore>, Router) {
    let store = Arc::new(MemoryTableStore::with_table(TABLE));
    let dispatcher = Dispatcher::new(ProductService::new(store.clone(), TABLE));
    (store, router(dispatcher))
}

async fn send(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_health_probe() {
    let (_, app) = app();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_post_then_list_over_http() {
    let (_, app) = app();

    let (status, body) = send(&app, "POST", "/products", r#"{"name": "Widget"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully finished operation: \"POST\"");
    assert_eq!(body["body"]["items_affected"], 1);

    let (status, body) = send(&app, "GET", "/products", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully finished operation: \"GET\"");
    assert_eq!(body["body"].as_array().unwrap().len(), 1);
    assert_eq!(body["body"][0]["name"], "Widget");
}

#[tokio::test]
async fn test_get_by_id_over_http() {
    let (store, app) = app();
    store
        .put_item(TABLE, json!({"id": "1", "name": "Widget"}).as_object().cloned().unwrap())
        .await
        .unwrap();

    let (status, body) = send(&app, "GET", "/products/1", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["body"]["name"], "Widget");

    // Absence is an empty object, not a failure.
    let (status, body) = send(&app, "GET", "/products/nope", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["body"], json!({}));
}

#[tokio::test]
async fn test_category_filter_over_http() {
    let (store, app) = app();
    store
        .put_item(
            TABLE,
            json!({"id": "42", "category": "Smartphones"}).as_object().cloned().unwrap(),
        )
        .await
        .unwrap();

    let (status, body) = send(&app, "GET", "/products/42?category=Phone", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["body"].as_array().unwrap().len(), 1);

    let (_, body) = send(&app, "GET", "/products/42?category=Laptop", "").await;
    assert_eq!(body["body"], json!([]));
}

#[tokio::test]
async fn test_update_and_delete_over_http() {
    let (store, app) = app();
    store
        .put_item(TABLE, json!({"id": "1", "name": "Widget"}).as_object().cloned().unwrap())
        .await
        .unwrap();

    let (status, _) = send(&app, "PUT", "/products/1", r#"{"category": "X"}"#).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/products/1", "").await;
    assert_eq!(body["body"]["category"], "X");
    assert_eq!(body["body"]["name"], "Widget");

    let (status, body) = send(&app, "DELETE", "/products/1", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["body"]["items_affected"], 1);

    let (_, body) = send(&app, "GET", "/products/1", "").await;
    assert_eq!(body["body"], json!({}));
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let (_, app) = app();

    let (status, body) = send(&app, "POST", "/products", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Failed to perform operation.");
    assert!(body["errorMsg"].as_str().unwrap().contains("malformed request body"));
    assert!(body["errorStack"].is_string());
}

#[tokio::test]
async fn test_empty_update_is_bad_request() {
    let (_, app) = app();

    let (status, body) = send(&app, "PUT", "/products/1", "{}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorMsg"], "update requires at least one field");
}

#[tokio::test]
async fn test_unsupported_method_is_method_not_allowed() {
    let (_, app) = app();

    let (status, body) = send(&app, "PATCH", "/products", "").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["errorMsg"], "unsupported route: \"PATCH\"");
}
