//! Field validators for JSON input.

use serde_json::{Map, Value};

use super::{FieldResult, MISSING_FIELD, NOT_AN_INTEGER, NULL_FIELD};

/// Read `field` from `input` as a required integer.
pub fn integer_field(input: &Map<String, Value>, field: &str) -> FieldResult<i64> {
    match input.get(field) {
        None => FieldResult::invalid(MISSING_FIELD),
        Some(Value::Null) => FieldResult::invalid(NULL_FIELD),
        Some(value) => match coerce_integer(value) {
            Some(n) => FieldResult::Valid(n),
            None => FieldResult::invalid(NOT_AN_INTEGER),
        },
    }
}

/// Coerce a JSON value to an integer.
///
/// Accepts integers, floats without a fractional part, and strings holding a
/// signed decimal integer. Everything else, booleans included, is rejected.
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            let f = n.as_f64()?;
            if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                Some(f as i64)
            } else {
                None
            }
        }
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
