//! # faultline-domain
//!
//! Pure domain model for the faultline error responder.
//!
//! ## Responsibilities
//! - Foundational types: timestamps and their wire format
//! - Define the **exception model**: transport, domain and unclassified
//!   failures, each optionally carrying a context bag
//! - Define **field violations** (structured per-field validation failures)
//! - Define the **uniform response body** and the pure message policy that
//!   derives status, error code and message from a classified exception
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Collaborators (status mapping, flattening, reply writing) are expressed as
//! traits in the `app` crate (ports).

pub mod exception;
pub mod resolution;
pub mod response;
pub mod time;
pub mod validation;
