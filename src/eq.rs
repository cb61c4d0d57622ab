//! Deep equality over the dynamic value model
//!
//! Same-type, no-coercion comparison: `1` never equals `true`, `Null` never
//! equals `Undefined`. The one departure from IEEE `==` is that NaN equals
//! NaN, so a value always equals itself. Tokens compare by identity; records
//! compare own entries key-by-key (order-insensitive) and then their
//! delegation parents.

use crate::value::{Record, Value};

/// Deep structural equality.
pub fn eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y || (x.is_nan() && y.is_nan()),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Token(x), Value::Token(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| eq(l, r))
        }
        (Value::Record(x), Value::Record(y)) => record_eq(x, y),
        _ => false,
    }
}

fn record_eq(a: &Record, b: &Record) -> bool {
    if a.own_len() != b.own_len() {
        return false;
    }
    for (key, value) in a.own_entries() {
        match b.own_get(key) {
            Some(other) if eq(value, other) => {}
            _ => return false,
        }
    }
    match (a.proto(), b.proto()) {
        (None, None) => true,
        (Some(x), Some(y)) => record_eq(x, y),
        _ => false,
    }
}
