//! Axum router assembly.

use axum::Router;
use axum::extract::OriginalUri;
use axum::http::Method;
use axum::routing::get;
use serde_json::json;
use tower_http::trace::TraceLayer;

use faultline_domain::exception::TransportException;

use crate::error::ApiError;

/// Build the top-level axum [`Router`].
///
/// Mounts the API under `/api`, answers unmatched routes and unsupported
/// methods with a 404 transport exception and catches handler panics, so
/// every failure leaves through the same responder. Includes a [`TraceLayer`]
/// that logs each HTTP request/response using the `tracing` ecosystem.
pub fn build() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .method_not_allowed_fallback(not_found)
        .fallback(not_found)
        .layer(crate::panic::layer())
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}

pub(crate) async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    TransportException::new(
        404,
        json!({
            "message": format!("Cannot {method} {}", uri.path()),
            "error": "Not Found",
            "statusCode": 404
        }),
    )
    .into()
}
