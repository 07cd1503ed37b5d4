//! # Response Envelopes
//!
//! Every invocation yields exactly one envelope: a success wrapper naming
//! the finished method, or an error wrapper carrying the failure detail.
//! The invocation runtime always receives a structured envelope; nothing
//! escapes as a bare error.

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::store::StoreAck;

use super::errors::ProductError;

/// Result payload of a single operation.
///
/// List operations yield sequences (empty when nothing matched); a point
/// lookup yields the item or an empty object when absent; writes yield the
/// store's raw acknowledgment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OperationResult {
    /// Decoded items from a list operation
    Items(Vec<Value>),
    /// A single decoded item, or an empty object when absent
    Item(Value),
    /// Raw store acknowledgment from a write operation
    Ack(StoreAck),
}

/// Body of the outbound envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EnvelopeBody {
    /// Successful operation
    Success {
        /// Message naming the finished method
        message: String,
        /// The operation's result payload
        body: OperationResult,
    },
    /// Failed operation
    Error {
        /// Fixed failure message
        message: String,
        /// The failure's own message
        #[serde(rename = "errorMsg")]
        error_msg: String,
        /// Rendered source chain of the failure
        #[serde(rename = "errorStack")]
        error_stack: String,
    },
}

/// The structured response returned for every invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    /// HTTP status of the outcome
    #[serde(rename = "statusCode")]
    pub status_code: u16,

    /// Success or error payload
    pub body: EnvelopeBody,
}

impl Envelope {
    /// Wrap an operation result in a success envelope.
    pub fn success(method: &Method, result: OperationResult) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            body: EnvelopeBody::Success {
                message: format!("Successfully finished operation: \"{method}\""),
                body: result,
            },
        }
    }

    /// Wrap a failure in an error envelope with its real status code.
    pub fn error(err: &ProductError) -> Self {
        Self {
            status_code: err.status_code().as_u16(),
            body: EnvelopeBody::Error {
                message: "Failed to perform operation.".to_string(),
                error_msg: err.to_string(),
                error_stack: err.stack(),
            },
        }
    }

    /// True when the envelope wraps a successful operation.
    pub fn is_success(&self) -> bool {
        matches!(self.body, EnvelopeBody::Success { .. })
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_names_the_method() {
        let envelope = Envelope::success(&Method::GET, OperationResult::Items(vec![]));
        assert_eq!(envelope.status_code, 200);

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["body"]["message"], "Successfully finished operation: \"GET\"");
        assert_eq!(json["body"]["body"], json!([]));
    }

    #[test]
    fn test_error_envelope_carries_message_and_stack() {
        let err = ProductError::EmptyUpdate;
        let envelope = Envelope::error(&err);
        assert_eq!(envelope.status_code, 400);
        assert!(!envelope.is_success());

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["body"]["message"], "Failed to perform operation.");
        assert_eq!(json["body"]["errorMsg"], "update requires at least one field");
        assert!(json["body"]["errorStack"].is_string());
    }

    #[test]
    fn test_ack_result_serializes_untagged() {
        let envelope = Envelope::success(
            &Method::POST,
            OperationResult::Ack(StoreAck { items_affected: 1 }),
        );
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["body"]["body"]["items_affected"], 1);
    }
}
