//! JSON API handlers demonstrating the uniform error shape.

#[allow(clippy::missing_errors_doc)]
pub mod echo;
#[allow(clippy::missing_errors_doc)]
pub mod fail;

use axum::Router;
use axum::routing::{get, post};

/// Build the `/api` sub-router.
pub fn routes() -> Router {
    Router::new()
        .route("/echo", post(echo::echo))
        .route("/fail/{kind}", get(fail::fail))
        .method_not_allowed_fallback(crate::router::not_found)
}
