//! In-process validation flattener.

use faultline_domain::validation::FieldViolation;
use serde_json::Value;

use crate::ports::ValidationFlattener;

/// Flattens field violations into a JSON array of constraint messages.
///
/// A violation without children contributes its own constraint messages.
/// A violation with children contributes its descendants instead, each
/// message prefixed with the dotted path of its parents
/// (`address.city must be a string`). A nested parent is emitted after its
/// own descendants.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintFlattener;

impl ValidationFlattener for ConstraintFlattener {
    fn flatten(&self, errors: &[FieldViolation]) -> Value {
        let mut entries = Vec::new();
        for violation in errors {
            expand(violation, None, &mut entries);
        }

        let messages = entries
            .into_iter()
            .flat_map(|(prefix, violation)| {
                violation
                    .constraints
                    .iter()
                    .map(move |constraint| match &prefix {
                        Some(path) => format!("{path}.{}", constraint.message),
                        None => constraint.message.clone(),
                    })
            })
            .map(Value::String)
            .collect();

        Value::Array(messages)
    }
}

/// Depth-first walk pairing each reported violation with its parent path.
fn expand<'a>(
    violation: &'a FieldViolation,
    parent_path: Option<&str>,
    out: &mut Vec<(Option<String>, &'a FieldViolation)>,
) {
    if !violation.has_children() {
        out.push((parent_path.map(str::to_string), violation));
        return;
    }

    let path = match parent_path {
        Some(parent) => format!("{parent}.{}", violation.property),
        None => violation.property.clone(),
    };
    for child in &violation.children {
        if child.has_children() {
            expand(child, Some(&path), out);
        }
        out.push((Some(path.clone()), child));
    }
}
