//! `GET /api/fail/{kind}` — raises one failure of the requested kind.
//!
//! Lets operators check end to end that every kind of failure reaches
//! clients in the same shape.

use axum::extract::Path;
use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;

use faultline_domain::exception::{DomainException, Exception, TransportException};

use crate::error::ApiError;

/// `GET /api/fail/{kind}`
///
/// # Panics
///
/// Panics on purpose when `kind` is `panic`.
pub async fn fail(kind: Result<Path<String>, PathRejection>) -> Result<StatusCode, ApiError> {
    let Path(kind) = kind?;
    let exception: Exception = match kind.as_str() {
        "transport" => TransportException::new(403, "forbidden").into(),
        "domain" => DomainException::new("USER_NOT_FOUND")
            .with_status(404)
            .with_safe_message("user not found")
            .into(),
        "internal" => DomainException::new("DATABASE_UNAVAILABLE")
            .with_message("connection refused by 10.0.0.12:5432")
            .into(),
        "unclassified" => Exception::unclassified(std::io::Error::other("disk quota exceeded")),
        "panic" => panic!("requested panic"),
        other => TransportException::with_message(404, format!("unknown failure kind `{other}`"))
            .into(),
    };
    Err(exception.into())
}
