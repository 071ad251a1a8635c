//! Port definitions — traits that collaborators implement.
//!
//! Ports are the boundaries between the responder and the host it runs in.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod clock;
pub mod reply;
pub mod status_codes;
pub mod validation;

pub use clock::{Clock, SystemClock};
pub use reply::ReplyAdapter;
pub use status_codes::StatusCodeMapper;
pub use validation::ValidationFlattener;
