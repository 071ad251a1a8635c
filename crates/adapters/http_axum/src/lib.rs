//! # faultline-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Implement the responder's collaborators for axum:
//!   - [`reply::AxumReplier`] writes the body onto an axum [`Response`](axum::response::Response)
//!   - [`status_codes::HttpStatusCodeMapper`] maps statuses to `HTTP_*` codes
//! - Expose [`error::ApiError`], the `IntoResponse` type handlers return, so
//!   every failure leaves the service in the same shape
//! - Turn extractor rejections, unmatched routes and handler panics into
//!   exceptions answered by the same responder
//! - Assemble the axum [`Router`](axum::Router)
//!
//! ## Dependency rule
//! Depends on `faultline-app` (for port traits and the responder) and
//! `faultline-domain` (for the exception model). Never leaks axum types into
//! the domain.

pub mod api;
pub mod error;
pub mod panic;
pub mod rejection;
pub mod reply;
pub mod router;
pub mod status_codes;
