//! Own-key enumeration

use crate::value::{PropKey, Value};

/// Own enumerable string keys, in insertion order.
///
/// Records yield their own named keys — token-keyed and inherited entries
/// are skipped (contrast with the resolver, which reaches inherited
/// members). Arrays and strings are array-like and yield their index
/// spellings. Everything else yields nothing.
pub fn keys(value: &Value) -> Vec<String> {
    match value {
        Value::Record(rec) => rec
            .own_entries()
            .filter_map(|(key, _)| match key {
                PropKey::Name(name) => Some(name.clone()),
                PropKey::Token(_) => None,
            })
            .collect(),
        Value::Array(items) => index_keys(items.len()),
        Value::String(s) => index_keys(s.chars().count()),
        _ => Vec::new(),
    }
}

fn index_keys(len: usize) -> Vec<String> {
    (0..len).map(|i| i.to_string()).collect()
}
