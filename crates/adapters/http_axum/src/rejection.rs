//! Extractor rejections as transport exceptions.
//!
//! axum rejects malformed requests before a handler runs. Handlers that take
//! `Result<Extractor, Rejection>` can `?` the rejection into an [`ApiError`]
//! so the client still receives the uniform body.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;

use faultline_domain::exception::TransportException;

use crate::error::ApiError;

/// Build a transport exception from a rejection's status and body text.
#[must_use]
pub fn transport_exception(status: StatusCode, body_text: String) -> TransportException {
    TransportException::with_message(status.as_u16(), body_text)
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        transport_exception(rejection.status(), rejection.body_text()).into()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        transport_exception(rejection.status(), rejection.body_text()).into()
    }
}
