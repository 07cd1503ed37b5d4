//! # Request Descriptor
//!
//! The parsed shape the invocation runtime hands to the dispatcher: a
//! method, optional path and query parameter mappings, and an optional raw
//! body. Parameter *presence* (not just value) drives GET routing, so both
//! mappings stay optional rather than defaulting to empty.

use std::collections::HashMap;

use axum::http::Method;

/// Inbound request descriptor
#[derive(Debug, Clone)]
pub struct ProductRequest {
    /// HTTP method of the invocation
    pub method: Method,

    /// Path parameters, when the route carried any (may contain `id`)
    pub path_params: Option<HashMap<String, String>>,

    /// Query parameters, when the URI carried any (may contain `category`)
    pub query_params: Option<HashMap<String, String>>,

    /// Raw request body, expected to be JSON for POST/PUT
    pub body: Option<String>,
}

impl ProductRequest {
    /// Create a descriptor with no parameters and no body.
    pub fn new(method: Method) -> Self {
        Self {
            method,
            path_params: None,
            query_params: None,
            body: None,
        }
    }

    /// Add a path parameter.
    pub fn with_path_param(mut self, name: &str, value: &str) -> Self {
        self.path_params
            .get_or_insert_with(HashMap::new)
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Add a query parameter.
    pub fn with_query_param(mut self, name: &str, value: &str) -> Self {
        self.query_params
            .get_or_insert_with(HashMap::new)
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Set the raw body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Look up a path parameter.
    pub fn path_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
    }

    /// Look up a query parameter.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_params
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
    }

    /// True when the request carried any path parameters.
    pub fn has_path_params(&self) -> bool {
        self.path_params.as_ref().is_some_and(|params| !params.is_empty())
    }

    /// True when the request carried any query parameters.
    pub fn has_query_params(&self) -> bool {
        self.query_params.as_ref().is_some_and(|params| !params.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_request_has_no_params() {
        let request = ProductRequest::new(Method::GET);
        assert!(!request.has_path_params());
        assert!(!request.has_query_params());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_param_lookup() {
        let request = ProductRequest::new(Method::GET)
            .with_path_param("id", "42")
            .with_query_param("category", "Phone");

        assert_eq!(request.path_param("id"), Some("42"));
        assert_eq!(request.query_param("category"), Some("Phone"));
        assert!(request.has_path_params());
        assert!(request.has_query_params());
    }
}
