//! Field violations — structured per-field validation failures.
//!
//! A [`FieldViolation`] names the offending property, optionally the value
//! that was rejected, the constraints it broke, and nested violations for
//! child objects. Order is significant everywhere: constraints and children
//! are kept in the order they were reported.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single broken constraint, e.g. `isEmail` → `email must be an email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    /// Machine name of the rule.
    pub name: String,
    /// Display-ready description of the failure.
    pub message: String,
}

/// A validation failure on one property, possibly with nested failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldViolation {
    pub property: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FieldViolation>,
}

impl FieldViolation {
    /// Start a violation for `property` with no constraints or children.
    #[must_use]
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: None,
            constraints: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_constraint(mut self, name: impl Into<String>, message: impl Into<String>) -> Self {
        self.constraints.push(Constraint {
            name: name.into(),
            message: message.into(),
        });
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: FieldViolation) -> Self {
        self.children.push(child);
        self
    }

    /// Whether this violation nests further violations.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
