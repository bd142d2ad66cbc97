//! JSON shapes exchanged with the review endpoint
//!
//! The server's response is loosely typed, so it is decoded in two steps:
//! first into a permissive raw view of the top-level object, then into
//! [`SubmitReviewResponse`], which the rest of the crate matches on.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Request body for `POST /api/submit-review`
#[derive(Debug, Serialize)]
pub struct SubmitReviewRequest<'a> {
    pub rating: u8,
    pub review_text: &'a str,
}

/// Decoded response from `POST /api/submit-review`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReviewResponse {
    /// `success` was truthy
    Accepted {
        review_id: Option<String>,
        ai_response: Option<String>,
    },
    /// `success` was falsy or missing
    Rejected { error: Option<String> },
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Invalid response from server: {0}")]
    Json(#[from] serde_json::Error),
}

/// Permissive view of the response body
///
/// Only a top-level JSON object carries fields. Any other JSON value reads as
/// an object with no keys, so it never counts as accepted.
#[derive(Debug, Default)]
pub struct RawResponse {
    success: Value,
    review_id: Value,
    ai_response: Value,
    error: Value,
}

impl RawResponse {
    pub fn from_slice(body: &[u8]) -> Result<Self, DecodeError> {
        match serde_json::from_slice(body)? {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => {
                tracing::debug!(kind = json_kind(&other), "Response body is not an object");
                Ok(Self::default())
            }
        }
    }

    fn from_map(mut map: Map<String, Value>) -> Self {
        let mut take = |key: &str| map.remove(key).unwrap_or_default();
        Self {
            success: take("success"),
            review_id: take("review_id"),
            ai_response: take("ai_response"),
            error: take("error"),
        }
    }

    /// Server-supplied error message, if it is a non-empty string
    pub fn error_message(&self) -> Option<String> {
        non_empty_string(&self.error)
    }
}

impl From<RawResponse> for SubmitReviewResponse {
    fn from(raw: RawResponse) -> Self {
        if !is_truthy(&raw.success) {
            return Self::Rejected {
                error: raw.error_message(),
            };
        }

        let review_id = match &raw.review_id {
            Value::String(id) if !id.is_empty() => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        };

        Self::Accepted {
            review_id,
            ai_response: non_empty_string(&raw.ai_response),
        }
    }
}

/// JSON truthiness: `false`, `null`, `0`, `""` and missing are falsy
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn non_empty_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
