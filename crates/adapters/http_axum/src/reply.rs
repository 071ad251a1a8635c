//! axum implementation of the reply port.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use faultline_app::ports::ReplyAdapter;
use faultline_domain::response::ErrorResponseBody;

/// Writes error bodies as `application/json` onto an axum [`Response`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AxumReplier;

impl ReplyAdapter for AxumReplier {
    type Target = Response;

    fn reply(&self, target: &mut Response, body: &ErrorResponseBody, status_code: u16) {
        let status = StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        *target = (status, Json(body)).into_response();
    }
}
