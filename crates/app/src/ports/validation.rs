//! Validation port — flatten structured field violations for display.

use faultline_domain::validation::FieldViolation;
use serde_json::Value;

/// Reduces an ordered list of field violations to a display-ready message.
pub trait ValidationFlattener {
    /// Flatten `errors`, preserving their order.
    fn flatten(&self, errors: &[FieldViolation]) -> Value;
}

impl<T: ValidationFlattener + ?Sized> ValidationFlattener for &T {
    fn flatten(&self, errors: &[FieldViolation]) -> Value {
        (**self).flatten(errors)
    }
}

impl<T: ValidationFlattener + ?Sized> ValidationFlattener for std::sync::Arc<T> {
    fn flatten(&self, errors: &[FieldViolation]) -> Value {
        (**self).flatten(errors)
    }
}
