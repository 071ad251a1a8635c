//! Status code port — numeric HTTP status → stable machine-readable code.

/// Translates an HTTP status into a stable string identifier.
///
/// Implementations must be pure and total: every `u16` maps to *some* code,
/// with an "unknown" code for statuses they do not recognise.
pub trait StatusCodeMapper {
    /// Return the error code for `status`.
    fn map_status(&self, status: u16) -> String;
}

impl<T: StatusCodeMapper + ?Sized> StatusCodeMapper for &T {
    fn map_status(&self, status: u16) -> String {
        (**self).map_status(status)
    }
}

impl<T: StatusCodeMapper + ?Sized> StatusCodeMapper for std::sync::Arc<T> {
    fn map_status(&self, status: u16) -> String {
        (**self).map_status(status)
    }
}
