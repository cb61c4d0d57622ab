//! Array filtering

use crate::value::Value;

/// Filter an array value into the elements passing `pred`, cloned into a
/// new vec. Every non-array input (records included) yields an empty vec.
pub fn filter<P>(value: &Value, mut pred: P) -> Vec<Value>
where
    P: FnMut(&Value) -> bool,
{
    match value {
        Value::Array(items) => items.iter().filter(|item| pred(item)).cloned().collect(),
        _ => Vec::new(),
    }
}
