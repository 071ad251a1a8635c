//! Reply port — write the error response through the host's HTTP layer.

use faultline_domain::response::ErrorResponseBody;

/// Writes a reply on the host's response object.
///
/// `Target` is whatever the host treats as "the current response"; the
/// adapter overwrites it with `body` and `status_code`. Writing is expected
/// to succeed: there is nothing the responder could do about a failure.
pub trait ReplyAdapter {
    /// The host's response object.
    type Target;

    /// Write `body` with `status_code` onto `target`.
    fn reply(&self, target: &mut Self::Target, body: &ErrorResponseBody, status_code: u16);
}

impl<T: ReplyAdapter + ?Sized> ReplyAdapter for std::sync::Arc<T> {
    type Target = T::Target;

    fn reply(&self, target: &mut Self::Target, body: &ErrorResponseBody, status_code: u16) {
        (**self).reply(target, body, status_code);
    }
}
