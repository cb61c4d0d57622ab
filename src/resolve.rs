//! Traversal engine for the nested-value resolver
//!
//! Walks a root value one atomic key at a time, left to right, and
//! short-circuits to the caller's default the moment any step cannot
//! continue: a non-traversable intermediate value, a missing key, or path
//! text that did not tokenize. The walk is a pure, single-pass read with no
//! backtracking; the root is never retained or mutated.
//!
//! The terminal rule is deliberately asymmetric: a stored `Undefined`
//! reached through a fully successful walk is returned verbatim when no
//! default was supplied, but is replaced by the default when one was.

use tracing::trace;

use crate::path::{Key, PathInput};
use crate::value::{Record, Value};

/// Capability of holding keyed members. The engine depends only on this
/// trait; each container kind decides which key variants it accepts.
pub trait Traversable {
    /// Member at `key`, or `None` when the key is not addressable here.
    fn member(&self, key: &Key) -> Option<&Value>;
}

/// Sequence adapter: accepts `Index` directly and `Name` text that spells a
/// canonical base-10 index. Tokens never address a sequence.
impl Traversable for [Value] {
    fn member(&self, key: &Key) -> Option<&Value> {
        match key {
            Key::Index(index) => self.get(*index),
            Key::Name(name) => self.get(canonical_index(name)?),
            Key::Token(_) => None,
        }
    }
}

/// Record adapter: `Name` keys look up literally, `Index` keys as their
/// decimal spelling, tokens by identity. Inherited entries are reachable
/// through the delegation chain.
impl Traversable for Record {
    fn member(&self, key: &Key) -> Option<&Value> {
        match key {
            Key::Name(name) => self.lookup_name(name),
            Key::Index(index) => self.lookup_name(&index.to_string()),
            Key::Token(token) => self.lookup_token(token),
        }
    }
}

/// Canonical base-10 index text: digits only, no sign, no leading zeros
/// ("0" itself excepted). "00" and "1e2" are names, not indices.
fn canonical_index(name: &str) -> Option<usize> {
    if name.is_empty() || (name.len() > 1 && name.starts_with('0')) {
        return None;
    }
    if !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse().ok()
}

/// One traversal step against whichever adapter the current value offers.
fn step<'v>(current: &'v Value, key: &Key) -> Option<&'v Value> {
    match current {
        Value::Array(items) => items.as_slice().member(key),
        Value::Record(rec) => rec.member(key),
        // Primitives, Null, Undefined and tokens hold no members.
        _ => None,
    }
}

/// Resolve `path` against `root`, yielding `Value::Undefined` on any break
/// in the chain.
///
/// Examples:
/// - resolve(&v, "a.b.c")
/// - resolve(&v, "a[0].b")
/// - resolve(&v, ["a", "0", "b"])
pub fn resolve(root: &Value, path: impl Into<PathInput>) -> Value {
    resolve_with(root, path.into(), None)
}

/// Resolve `path` against `root`, substituting `default` at the exact point
/// traversal cannot continue, and for a final stored `Undefined`.
pub fn resolve_or(root: &Value, path: impl Into<PathInput>, default: Value) -> Value {
    resolve_with(root, path.into(), Some(default))
}

fn resolve_with(root: &Value, path: PathInput, default: Option<Value>) -> Value {
    let keys = match path.into_keys() {
        Ok(keys) => keys,
        Err(err) => {
            trace!(%err, "path text did not tokenize");
            return default.unwrap_or(Value::Undefined);
        }
    };

    // An empty path denotes no selection, even against a valid root.
    if keys.is_empty() {
        return default.unwrap_or(Value::Undefined);
    }

    let mut current = root;
    for key in &keys {
        match step(current, key) {
            Some(next) => current = next,
            None => {
                trace!(from = current.type_name(), "traversal halted");
                return default.unwrap_or(Value::Undefined);
            }
        }
    }

    match (current, default) {
        // A present-but-undefined final value defers to an explicit default.
        (Value::Undefined, Some(fallback)) => fallback,
        (found, _) => found.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Token;
    use serde_json::json;

    fn v(raw: serde_json::Value) -> Value {
        Value::from(raw)
    }

    #[test]
    fn resolves_direct_property() {
        assert_eq!(resolve(&v(json!({"a": 1})), "a"), Value::Number(1.0));
    }

    #[test]
    fn resolves_nested_dot_path() {
        let root = v(json!({"a": {"b": {"c": 3}}}));
        assert_eq!(resolve(&root, "a.b.c"), Value::Number(3.0));
    }

    #[test]
    fn bracket_and_dot_forms_are_equivalent() {
        let root = v(json!({"a": [{"b": 2}]}));
        assert_eq!(resolve(&root, "a[0].b"), Value::Number(2.0));
        assert_eq!(resolve(&root, "a.0.b"), Value::Number(2.0));
        assert_eq!(resolve(&root, ["a", "0", "b"]), Value::Number(2.0));
    }

    #[test]
    fn numeric_key_addresses_record_by_literal_name() {
        // "0" must index the array and then name the record field.
        let root = v(json!({"a": [{"0": 2}]}));
        assert_eq!(resolve(&root, "a.0.0"), Value::Number(2.0));
        assert_eq!(resolve(&root, "a[0][0]"), Value::Number(2.0));
    }

    #[test]
    fn index_key_addresses_record_by_decimal_name() {
        let root = v(json!({"a": {"b": 3}}));
        assert_eq!(
            resolve(&root, [Key::from("a"), Key::Index(0)]),
            Value::Undefined
        );

        let keyed = v(json!({"0": "zero"}));
        assert_eq!(
            resolve(&keyed, [Key::Index(0)]),
            Value::String("zero".to_string())
        );
    }

    #[test]
    fn non_canonical_index_text_misses_sequences() {
        let root = v(json!(["first"]));
        assert_eq!(resolve(&root, ["00"]), Value::Undefined);
        assert_eq!(resolve(&root, ["0"]), Value::String("first".to_string()));
    }

    #[test]
    fn broken_chain_yields_default() {
        let root = v(json!({"a": {"b": 2}}));
        assert_eq!(
            resolve_or(&root, "a.x.y", Value::from("default")),
            Value::String("default".to_string())
        );
    }

    #[test]
    fn empty_path_never_selects_the_root() {
        let root = v(json!({"a": 1}));
        assert_eq!(resolve(&root, ""), Value::Undefined);
        assert_eq!(resolve(&root, Vec::<Key>::new()), Value::Undefined);
        assert_eq!(
            resolve_or(&root, "", Value::from("d")),
            Value::String("d".to_string())
        );
    }

    #[test]
    fn malformed_path_yields_default() {
        let root = v(json!({"a": [1]}));
        assert_eq!(resolve(&root, "a[0"), Value::Undefined);
        assert_eq!(
            resolve_or(&root, "a[x]", Value::from("d")),
            Value::String("d".to_string())
        );
    }

    #[test]
    fn stored_undefined_passes_through_without_default() {
        let mut inner = Record::new();
        inner.insert("b", Value::Undefined);
        let mut root = Record::new();
        root.insert("a", inner);
        let root = Value::Record(root);

        assert_eq!(resolve(&root, "a.b"), Value::Undefined);
    }

    #[test]
    fn stored_undefined_defers_to_explicit_default() {
        let mut inner = Record::new();
        inner.insert("b", Value::Undefined);
        let mut root = Record::new();
        root.insert("a", inner);
        let root = Value::Record(root);

        assert_eq!(
            resolve_or(&root, "a.b", Value::from("fallback")),
            Value::String("fallback".to_string())
        );
    }

    #[test]
    fn stored_null_is_a_hit_even_with_default() {
        let root = v(json!({"a": {"b": null}}));
        assert_eq!(resolve_or(&root, "a.b", Value::from("d")), Value::Null);
    }

    #[test]
    fn non_traversable_roots_always_miss() {
        for root in [
            Value::Null,
            Value::Undefined,
            Value::Number(f64::NAN),
            Value::Number(f64::INFINITY),
            Value::Number(123.0),
            Value::from("test"),
            Value::Bool(true),
            Value::Token(Token::labeled("a")),
        ] {
            assert_eq!(resolve(&root, "a"), Value::Undefined);
            assert_eq!(
                resolve_or(&root, "a", Value::from("d")),
                Value::String("d".to_string())
            );
        }
    }

    #[test]
    fn token_keys_match_by_identity_only() {
        let outer = Token::labeled("a");
        let inner = Token::labeled("b");
        let stored = Token::labeled("result");

        let mut nested = Record::new();
        nested.insert(inner.clone(), stored.clone());
        let mut root = Record::new();
        root.insert(outer.clone(), nested);
        let root = Value::Record(root);

        assert_eq!(
            resolve(&root, [Key::Token(outer), Key::Token(inner)]),
            Value::Token(stored)
        );

        // A fresh token with the same label is a different key.
        let impostor = Token::labeled("a");
        assert_eq!(resolve(&root, impostor), Value::Undefined);
    }

    #[test]
    fn single_token_path_misses_with_default() {
        let root = Value::Record(Record::new());
        assert_eq!(
            resolve_or(&root, Token::labeled("a"), Value::from("default")),
            Value::String("default".to_string())
        );
    }

    #[test]
    fn inherited_members_are_reachable() {
        let mut parent = Record::new();
        parent.insert("a", 1);
        let child = Record::with_proto(parent);

        assert_eq!(resolve(&Value::Record(child), "a"), Value::Number(1.0));
    }

    #[test]
    fn sequence_elements_are_not_resplit() {
        let mut root = Record::new();
        root.insert("a.b", 7);
        let root = Value::Record(root);

        assert_eq!(resolve(&root, ["a.b"]), Value::Number(7.0));
        assert_eq!(resolve(&root, "a.b"), Value::Undefined);
    }

    #[test]
    fn resolution_is_idempotent() {
        let root = v(json!({"a": [{"b": 2}]}));
        let first = resolve(&root, "a[0].b");
        let second = resolve(&root, "a[0].b");
        assert_eq!(first, second);
    }
}
