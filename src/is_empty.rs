//! Emptiness testing

use crate::value::Value;

/// Whether a value holds nothing enumerable.
///
/// Scalars (numbers, bools, tokens, null, undefined) are always empty;
/// strings and arrays are empty at zero length; records are empty when they
/// have no OWN entries — inherited entries do not count, matching `keys`.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Null | Value::Bool(_) | Value::Number(_) | Value::Token(_) => {
            true
        }
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Record(rec) => rec.own_len() == 0,
    }
}
