//! String case normalization

use once_cell::sync::Lazy;
use regex::Regex;

use crate::value::Value;

/// A word is a maximal run of Unicode letters and digits; everything else
/// separates words.
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("valid word regex"));

/// Convert a string value to camelCase. Non-string inputs and strings with
/// no word characters yield the empty string.
pub fn camel_case(value: &Value) -> String {
    let Value::String(text) = value else {
        return String::new();
    };

    let mut out = String::new();
    for word in WORD.find_iter(text) {
        let lowered = word.as_str().to_lowercase();
        if out.is_empty() {
            out.push_str(&lowered);
        } else {
            out.push_str(&capitalize(&lowered));
        }
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
