//! Field-level validation for loosely typed input.
//!
//! Each field validator returns a [`FieldResult`]: either the coerced value or
//! the list of messages explaining why it was rejected. Record-level loaders
//! collect the failures into [`FieldErrors`] and keep going, so one request
//! reports every bad field at once.

mod fields;

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

pub use fields::{coerce_integer, integer_field};

/// Message for values that cannot be read as an integer.
pub const NOT_AN_INTEGER: &str = "Not a valid integer.";
/// Message for required fields that are absent from the input.
pub const MISSING_FIELD: &str = "Missing data for required field.";
/// Message for fields explicitly set to null.
pub const NULL_FIELD: &str = "Field may not be null.";
/// Message for input that is not a mapping at all.
pub const INVALID_INPUT: &str = "Invalid input type.";

/// Key used in [`FieldErrors`] for errors that belong to the whole input.
pub const SCHEMA_KEY: &str = "_schema";

/// Outcome of validating a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldResult<T> {
    Valid(T),
    Invalid(Vec<String>),
}

impl<T> FieldResult<T> {
    /// Shorthand for a failure with one message.
    pub fn invalid(message: impl Into<String>) -> Self {
        FieldResult::Invalid(vec![message.into()])
    }

    /// Chain a further check on a valid value. Failures pass through untouched.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> FieldResult<U>) -> FieldResult<U> {
        match self {
            FieldResult::Valid(value) => f(value),
            FieldResult::Invalid(messages) => FieldResult::Invalid(messages),
        }
    }

    /// Move the value out, recording any failure under `field` in `errors`.
    pub fn record(self, field: &str, errors: &mut FieldErrors) -> Option<T> {
        match self {
            FieldResult::Valid(value) => Some(value),
            FieldResult::Invalid(messages) => {
                for message in messages {
                    errors.add(field, message);
                }
                None
            }
        }
    }
}

/// Validation failures keyed by field name.
///
/// Serializes as `{ "field": ["message", ...] }` with fields in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to a field's error list.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Messages recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(|m| m.as_slice())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields with at least one error.
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.fields {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "{}: {}", field, messages.join(" "))?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}
