//! Uniform error response body.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::time::Timestamp;

/// The body every failed request is answered with.
///
/// Serialized as
/// `{ "statusCode": 404, "errorCode": "...", "message": ..., "timestamp": "..." }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponseBody {
    pub status_code: u16,
    pub error_code: String,
    /// A string in most cases; transport payloads and flattened validation
    /// errors can make it an array or object.
    pub message: Value,
    #[serde(with = "crate::time::iso8601")]
    pub timestamp: Timestamp,
}
