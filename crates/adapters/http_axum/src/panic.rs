//! Handler panics as unclassified exceptions.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;

use faultline_domain::exception::UnclassifiedException;

use crate::error::ApiError;

/// Layer answering panicking handlers with the uniform error body.
#[must_use]
pub fn layer() -> CatchPanicLayer<fn(Box<dyn Any + Send + 'static>) -> Response> {
    CatchPanicLayer::custom(handle_panic as fn(Box<dyn Any + Send + 'static>) -> Response)
}

/// Convert a panic payload into an error response.
///
/// The payload text is only logged; clients get the unclassified defaults.
#[must_use]
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|text| (*text).to_string()))
        .unwrap_or_else(|| "non-string panic payload".to_string());

    ApiError::from(UnclassifiedException::Panic(detail)).into_response()
}
