//! Resolution — the status, error code and message derived from an exception.
//!
//! Everything here is pure. Collaborator lookups (status → code mapping,
//! validation flattening) are passed in by the caller, so the classification
//! tree itself lives in the application layer while the per-branch policy
//! lives here.

use serde_json::Value;

use crate::exception::{DomainException, TransportException};
use crate::response::ErrorResponseBody;
use crate::time::Timestamp;

/// Status used when nothing more specific is known.
pub const DEFAULT_STATUS_CODE: u16 = 500;

/// Status forced whenever validation errors are attached.
pub const VALIDATION_STATUS_CODE: u16 = 400;

/// Error code used when nothing more specific is known.
pub const UNKNOWN_ERROR_CODE: &str = "ERROR_CODE_UNKNOWN";

/// Message used when no client-safe message is available.
pub const FALLBACK_MESSAGE: &str = "ERROR_MESSAGE_FALLBACK";

/// Whether `status` is a usable HTTP status code.
#[must_use]
pub fn is_http_status(status: u16) -> bool {
    (100..=599).contains(&status)
}

/// Return `status` when it is a usable HTTP status, the default otherwise.
#[must_use]
pub fn effective_status(status: u16) -> u16 {
    if is_http_status(status) {
        status
    } else {
        DEFAULT_STATUS_CODE
    }
}

/// Immutable outcome of classifying one exception.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub status_code: u16,
    pub error_code: String,
    pub message: Value,
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            status_code: DEFAULT_STATUS_CODE,
            error_code: UNKNOWN_ERROR_CODE.to_string(),
            message: Value::String(FALLBACK_MESSAGE.to_string()),
        }
    }
}

impl Resolution {
    /// Resolve a transport exception.
    ///
    /// `map_status` receives the effective status and returns its error code.
    #[must_use]
    pub fn transport(exception: &TransportException, map_status: impl FnOnce(u16) -> String) -> Self {
        let status_code = effective_status(exception.status);
        Self {
            status_code,
            error_code: known_code(map_status(status_code)),
            message: transport_message(&exception.payload),
        }
    }

    /// Resolve a domain exception.
    ///
    /// A 5xx domain exception never exposes its internal message.
    #[must_use]
    pub fn domain(exception: &DomainException) -> Self {
        let status_code = exception
            .http_status
            .map_or(DEFAULT_STATUS_CODE, effective_status);
        Self {
            status_code,
            error_code: known_code(exception.error_code.clone()),
            message: Value::String(domain_message(status_code, exception).to_string()),
        }
    }

    /// Apply the validation override: the flattened errors become the
    /// message and the status is forced to 400. The error code is kept.
    #[must_use]
    pub fn with_validation(self, message: Value) -> Self {
        Self {
            status_code: VALIDATION_STATUS_CODE,
            message,
            ..self
        }
    }

    /// Stamp the resolution into a response body.
    #[must_use]
    pub fn into_body(self, timestamp: Timestamp) -> ErrorResponseBody {
        ErrorResponseBody {
            status_code: self.status_code,
            error_code: self.error_code,
            message: self.message,
            timestamp,
        }
    }
}

/// The payload's `message` field when the payload is an object carrying one,
/// the whole payload otherwise.
#[must_use]
pub fn transport_message(payload: &Value) -> Value {
    payload
        .as_object()
        .and_then(|fields| fields.get("message"))
        .unwrap_or(payload)
        .clone()
}

fn domain_message(status_code: u16, exception: &DomainException) -> &str {
    let safe = non_empty(exception.safe_message.as_deref());
    let own = non_empty(exception.message.as_deref());

    let chosen = if status_code >= 500 {
        safe
    } else {
        safe.or(own)
    };
    chosen.unwrap_or(FALLBACK_MESSAGE)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

fn known_code(code: String) -> String {
    if code.trim().is_empty() {
        UNKNOWN_ERROR_CODE.to_string()
    } else {
        code
    }
}
