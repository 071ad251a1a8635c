//! `POST /api/echo` — validates a message and echoes it back.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use faultline_domain::exception::{DomainException, Exception};
use faultline_domain::validation::FieldViolation;

use crate::error::ApiError;

/// Longest message accepted, in characters.
pub const MAX_MESSAGE_LEN: usize = 280;

/// Request body for the echo endpoint.
#[derive(Debug, Deserialize)]
pub struct EchoRequest {
    pub message: String,
}

/// Response body for the echo endpoint.
#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub message: String,
    pub length: usize,
}

impl EchoRequest {
    /// Check field constraints, reporting every broken one.
    ///
    /// # Errors
    ///
    /// Returns a `VALIDATION_FAILED` exception carrying the field violations.
    pub fn validate(&self) -> Result<(), Exception> {
        let mut violation = FieldViolation::new("message").with_value(self.message.clone());
        if self.message.trim().is_empty() {
            violation = violation.with_constraint("isNotEmpty", "message should not be empty");
        }
        if self.message.chars().count() > MAX_MESSAGE_LEN {
            violation = violation.with_constraint(
                "maxLength",
                format!("message must be shorter than or equal to {MAX_MESSAGE_LEN} characters"),
            );
        }

        if violation.constraints.is_empty() {
            return Ok(());
        }
        Err(Exception::from(
            DomainException::new("VALIDATION_FAILED")
                .with_status(400)
                .with_safe_message("request validation failed"),
        )
        .with_validation_errors(vec![violation]))
    }
}

/// `POST /api/echo`
pub async fn echo(
    payload: Result<Json<EchoRequest>, JsonRejection>,
) -> Result<Json<EchoResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let length = request.message.chars().count();
    Ok(Json(EchoResponse {
        message: request.message,
        length,
    }))
}
