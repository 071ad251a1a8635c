//! Exception model — every failure that can reach the error responder.
//!
//! Failures come in three shapes, modelled as [`ExceptionKind`]:
//! - [`TransportException`]: raised by the HTTP layer itself, with an explicit
//!   status and a response payload.
//! - [`DomainException`]: raised by application logic, with a required error
//!   code and optional status/message hints.
//! - [`UnclassifiedException`]: anything else, treated opaquely.
//!
//! Any of them may carry an [`ExceptionContext`].

use std::error::Error as StdError;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::validation::FieldViolation;

/// Boxed error accepted as the source of an [`UnclassifiedException`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Failure raised by the HTTP layer with an explicit status and payload.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("HTTP {status} transport exception")]
pub struct TransportException {
    pub status: u16,
    /// Response payload: an object (usually with a `message` field) or a primitive.
    pub payload: Value,
}

impl TransportException {
    #[must_use]
    pub fn new(status: u16, payload: impl Into<Value>) -> Self {
        Self {
            status,
            payload: payload.into(),
        }
    }

    /// Build a transport exception whose payload is `{ "message": message }`.
    #[must_use]
    pub fn with_message(status: u16, message: impl Into<String>) -> Self {
        let mut payload = Map::new();
        payload.insert("message".to_string(), Value::String(message.into()));
        Self::new(status, Value::Object(payload))
    }
}

/// Application-level failure with a required machine error code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("domain exception {error_code}")]
pub struct DomainException {
    pub error_code: String,
    /// Suggested HTTP status; 500 is used when absent.
    pub http_status: Option<u16>,
    /// Message explicitly marked safe for client display.
    pub safe_message: Option<String>,
    /// Internal diagnostic message.
    pub message: Option<String>,
}

impl DomainException {
    #[must_use]
    pub fn new(error_code: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            http_status: None,
            safe_message: None,
            message: None,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    #[must_use]
    pub fn with_safe_message(mut self, message: impl Into<String>) -> Self {
        self.safe_message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Failure the responder knows nothing about.
#[derive(Debug, thiserror::Error)]
pub enum UnclassifiedException {
    /// A bare description with no underlying error value.
    #[error("unclassified exception: {0}")]
    Message(String),

    /// An arbitrary error raised somewhere below the HTTP layer.
    #[error("unclassified exception: {0}")]
    Source(#[source] BoxError),

    /// A request handler panicked; holds the panic payload when it was text.
    #[error("request handler panicked: {0}")]
    Panic(String),
}

/// The three shapes an [`Exception`] can take.
#[derive(Debug, thiserror::Error)]
pub enum ExceptionKind {
    #[error(transparent)]
    Transport(#[from] TransportException),

    #[error(transparent)]
    Domain(#[from] DomainException),

    #[error(transparent)]
    Unclassified(#[from] UnclassifiedException),
}

/// Optional context bag attached to an exception.
///
/// `validation_errors` is the only key the responder interprets; anything
/// else is carried in `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<Vec<FieldViolation>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A failure surfaced during request handling.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Exception {
    kind: ExceptionKind,
    context: Option<ExceptionContext>,
}

impl Exception {
    #[must_use]
    pub fn new(kind: impl Into<ExceptionKind>) -> Self {
        Self {
            kind: kind.into(),
            context: None,
        }
    }

    /// Shorthand for a [`TransportException`].
    #[must_use]
    pub fn transport(status: u16, payload: impl Into<Value>) -> Self {
        Self::new(TransportException::new(status, payload))
    }

    /// Wrap any error as an [`UnclassifiedException::Source`].
    #[must_use]
    pub fn unclassified(source: impl Into<BoxError>) -> Self {
        Self::new(UnclassifiedException::Source(source.into()))
    }

    /// Replace the context bag.
    #[must_use]
    pub fn with_context(mut self, context: ExceptionContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Attach validation errors, keeping any other context entries.
    #[must_use]
    pub fn with_validation_errors(mut self, errors: Vec<FieldViolation>) -> Self {
        self.context
            .get_or_insert_with(ExceptionContext::default)
            .validation_errors = Some(errors);
        self
    }

    #[must_use]
    pub fn kind(&self) -> &ExceptionKind {
        &self.kind
    }

    #[must_use]
    pub fn context(&self) -> Option<&ExceptionContext> {
        self.context.as_ref()
    }

    /// Validation errors from the context, if any were attached.
    ///
    /// An attached but empty list is still `Some`.
    #[must_use]
    pub fn validation_errors(&self) -> Option<&[FieldViolation]> {
        self.context
            .as_ref()
            .and_then(|ctx| ctx.validation_errors.as_deref())
    }
}

impl From<TransportException> for Exception {
    fn from(err: TransportException) -> Self {
        Self::new(err)
    }
}

impl From<DomainException> for Exception {
    fn from(err: DomainException) -> Self {
        Self::new(err)
    }
}

impl From<UnclassifiedException> for Exception {
    fn from(err: UnclassifiedException) -> Self {
        Self::new(err)
    }
}
