//! # faultline-app
//!
//! Application layer — the exception responder and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** the responder's collaborators implement:
//!   - `ReplyAdapter` — write the response on the host's response object
//!   - `StatusCodeMapper` — numeric status → stable error code
//!   - `ValidationFlattener` — field violations → display-ready message
//!   - `Clock` — the instant stamped on each body
//! - Provide the **use-case**: `ExceptionResponder` classifies an exception,
//!   builds the uniform body and writes exactly one reply
//! - Provide **in-process collaborators** that need no IO (`ConstraintFlattener`,
//!   `SystemClock`)
//!
//! ## Dependency rule
//! Depends on `faultline-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod flattener;
pub mod ports;
pub mod services;
