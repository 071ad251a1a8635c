//! HTTP error response mapping.

use axum::response::{IntoResponse, Response};

use faultline_app::flattener::ConstraintFlattener;
use faultline_app::services::exception_responder::ExceptionResponder;
use faultline_domain::exception::{
    DomainException, Exception, ExceptionKind, TransportException, UnclassifiedException,
};

use crate::reply::AxumReplier;
use crate::status_codes::HttpStatusCodeMapper;

/// The responder wired with the axum collaborators.
pub type AxumResponder = ExceptionResponder<AxumReplier, HttpStatusCodeMapper, ConstraintFlattener>;

/// Build the responder used by [`ApiError`].
#[must_use]
pub fn responder() -> AxumResponder {
    ExceptionResponder::new(AxumReplier, HttpStatusCodeMapper, ConstraintFlattener)
}

/// Maps any [`Exception`] to the uniform JSON error response.
#[derive(Debug)]
pub struct ApiError(Exception);

impl ApiError {
    #[must_use]
    pub fn exception(&self) -> &Exception {
        &self.0
    }

    #[must_use]
    pub fn into_exception(self) -> Exception {
        self.0
    }
}

impl From<Exception> for ApiError {
    fn from(err: Exception) -> Self {
        Self(err)
    }
}

impl From<TransportException> for ApiError {
    fn from(err: TransportException) -> Self {
        Self(err.into())
    }
}

impl From<DomainException> for ApiError {
    fn from(err: DomainException) -> Self {
        Self(err.into())
    }
}

impl From<UnclassifiedException> for ApiError {
    fn from(err: UnclassifiedException) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = Response::default();
        responder().respond(&self.0, &mut response);

        let status = response.status();
        match self.0.kind() {
            ExceptionKind::Unclassified(err) => {
                tracing::error!(status = status.as_u16(), error = %err, "unhandled exception");
            }
            _ if status.is_server_error() => {
                tracing::error!(status = status.as_u16(), error = %self.0, "request failed");
            }
            _ => {
                tracing::debug!(status = status.as_u16(), error = %self.0, "request rejected");
            }
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use faultline_domain::validation::FieldViolation;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_answer_transport_exception_with_mapped_code() {
        let response =
            ApiError::from(TransportException::with_message(404, "not found")).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["statusCode"], 404);
        assert_eq!(json["errorCode"], "HTTP_NOT_FOUND");
        assert_eq!(json["message"], "not found");
    }

    #[tokio::test]
    async fn should_answer_domain_exception_with_its_code() {
        let err = DomainException::new("BAD_INPUT")
            .with_status(400)
            .with_safe_message("please check input");
        let response = ApiError::from(err).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["errorCode"], "BAD_INPUT");
        assert_eq!(json["message"], "please check input");
    }

    #[tokio::test]
    async fn should_answer_unclassified_exception_with_defaults() {
        let response = ApiError::from(Exception::unclassified(std::io::Error::other("disk full")))
            .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(
            json,
            json!({
                "statusCode": 500,
                "errorCode": "ERROR_CODE_UNKNOWN",
                "message": "ERROR_MESSAGE_FALLBACK",
                "timestamp": json["timestamp"].clone()
            })
        );
    }

    #[tokio::test]
    async fn should_answer_validation_errors_with_bad_request() {
        let err = Exception::from(DomainException::new("SIGNUP_REJECTED").with_status(409))
            .with_validation_errors(vec![
                FieldViolation::new("email").with_constraint("isEmail", "email must be an email"),
            ]);
        let response = ApiError::from(err).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["statusCode"], 400);
        assert_eq!(json["errorCode"], "SIGNUP_REJECTED");
        assert_eq!(json["message"], json!(["email must be an email"]));
    }

    #[test]
    fn should_give_back_wrapped_exception() {
        let err = ApiError::from(TransportException::new(403, "forbidden"));
        assert!(matches!(err.exception().kind(), ExceptionKind::Transport(_)));
        assert!(matches!(err.into_exception().kind(), ExceptionKind::Transport(_)));
    }
}
