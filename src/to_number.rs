//! Flexible numeric coercion
//!
//! String parsing accepts the 0b/0o/0x radix prefixes and trims whitespace;
//! a signed hex literal is rejected outright (NaN), not parsed as negative.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::value::Value;

/// Signed hex never coerces: "-0x1" is NaN, not -1.
static BAD_HEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-+]0[xX]").expect("valid hex regex"));

/// Coerce a value to an IEEE-754 double.
///
/// - numbers pass through, null is 0, bools are 0/1
/// - strings are trimmed then parsed (radix prefixes, decimals, floats);
///   the empty string is 0
/// - arrays coerce through their single element: [] is 0, [x] is
///   to_number(x), anything longer is NaN
/// - undefined, tokens and records are NaN
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => *n,
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::String(s) => parse_text(s),
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [only] => to_number(only),
            _ => f64::NAN,
        },
        Value::Undefined | Value::Token(_) | Value::Record(_) => f64::NAN,
    }
}

fn parse_text(raw: &str) -> f64 {
    let text = raw.trim();
    if text.is_empty() {
        return 0.0;
    }
    if BAD_HEX.is_match(text) {
        return f64::NAN;
    }
    if let Some(digits) = strip_radix_prefix(text, "0b", "0B") {
        return parse_radix(digits, 2);
    }
    if let Some(digits) = strip_radix_prefix(text, "0o", "0O") {
        return parse_radix(digits, 8);
    }
    if let Some(digits) = strip_radix_prefix(text, "0x", "0X") {
        return parse_radix(digits, 16);
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

fn strip_radix_prefix<'t>(text: &'t str, lower: &str, upper: &str) -> Option<&'t str> {
    text.strip_prefix(lower).or_else(|| text.strip_prefix(upper))
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    u64::from_str_radix(digits, radix)
        .map(|n| n as f64)
        .unwrap_or(f64::NAN)
}
