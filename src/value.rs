//! Dynamic value model shared by every utility in the crate
//!
//! `Value` is an owned, JSON-like tree extended with the two constructs the
//! utilities need beyond JSON:
//! - `Undefined`, the absence marker, distinct from `Null`
//! - `Token`, an opaque identity key compared by identity only
//!
//! Records carry an optional delegation parent (`proto`), so inherited
//! members are representable. Values are caller-owned and never mutated by
//! any utility in this crate.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Monotonic id source for tokens. Ids are never reused within a process.
static NEXT_TOKEN_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity token, usable as a value and as a record key.
///
/// Two tokens are equal only when they originate from the same allocation;
/// the label is descriptive and never participates in equality or hashing.
#[derive(Debug, Clone)]
pub struct Token {
    id: u64,
    label: Option<Arc<str>>,
}

impl Token {
    /// Allocate a fresh, unlabeled token.
    pub fn new() -> Self {
        Self {
            id: NEXT_TOKEN_ID.fetch_add(1, Ordering::Relaxed),
            label: None,
        }
    }

    /// Allocate a fresh token with a descriptive label.
    pub fn labeled(label: impl AsRef<str>) -> Self {
        Self {
            id: NEXT_TOKEN_ID.fetch_add(1, Ordering::Relaxed),
            label: Some(Arc::from(label.as_ref())),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::new()
    }
}

// Identity semantics: the id alone decides equality.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "token#{}({})", self.id, label),
            None => write!(f, "token#{}", self.id),
        }
    }
}

/// Key of an own record entry: a property name or an identity token.
#[derive(Debug, Clone, PartialEq)]
pub enum PropKey {
    Name(String),
    Token(Token),
}

impl From<&str> for PropKey {
    fn from(name: &str) -> Self {
        PropKey::Name(name.to_string())
    }
}

impl From<String> for PropKey {
    fn from(name: String) -> Self {
        PropKey::Name(name)
    }
}

impl From<Token> for PropKey {
    fn from(token: Token) -> Self {
        PropKey::Token(token)
    }
}

/// Insertion-ordered record with an optional delegation parent.
///
/// Own entries are kept in first-insertion order (re-inserting a key keeps
/// its original position). Lookups that follow the delegation chain consult
/// own entries first, then the parent, transitively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    entries: Vec<(PropKey, Value)>,
    proto: Option<Box<Record>>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record delegating to `proto`.
    pub fn with_proto(proto: Record) -> Self {
        Self {
            entries: Vec::new(),
            proto: Some(Box::new(proto)),
        }
    }

    /// Insert or replace an own entry, preserving first-insertion order.
    pub fn insert(&mut self, key: impl Into<PropKey>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Own-entry lookup; does not consult the delegation parent.
    pub fn own_get(&self, key: &PropKey) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Named-entry lookup following the delegation chain.
    pub fn lookup_name(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find_map(|(k, v)| match k {
                PropKey::Name(n) if n == name => Some(v),
                _ => None,
            })
            .or_else(|| self.proto.as_deref().and_then(|p| p.lookup_name(name)))
    }

    /// Token-entry lookup (identity match) following the delegation chain.
    pub fn lookup_token(&self, token: &Token) -> Option<&Value> {
        self.entries
            .iter()
            .find_map(|(k, v)| match k {
                PropKey::Token(t) if t == token => Some(v),
                _ => None,
            })
            .or_else(|| self.proto.as_deref().and_then(|p| p.lookup_token(token)))
    }

    /// Own entries in insertion order.
    pub fn own_entries(&self) -> impl Iterator<Item = (&PropKey, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn own_len(&self) -> usize {
        self.entries.len()
    }

    pub fn proto(&self) -> Option<&Record> {
        self.proto.as_deref()
    }

    pub fn set_proto(&mut self, proto: Record) {
        self.proto = Some(Box::new(proto));
    }
}

/// A dynamically typed value.
///
/// Numbers are IEEE-754 doubles; NaN and the infinities are ordinary values
/// here, not errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// The absence marker. A record entry may legitimately store this.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Token(Token),
    Array(Vec<Value>),
    Record(Record),
}

impl Value {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Whether keyed member lookup is possible at all on this value.
    pub fn is_traversable(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Record(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(rec) => Some(rec),
            _ => None,
        }
    }

    /// Loose type name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Token(_) => "token",
            Value::Array(_) => "array",
            Value::Record(_) => "record",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Token> for Value {
    fn from(token: Token) -> Self {
        Value::Token(token)
    }
}

impl From<Record> for Value {
    fn from(rec: Record) -> Self {
        Value::Record(rec)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<serde_json::Value> for Value {
    fn from(raw: serde_json::Value) -> Self {
        match raw {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                let mut rec = Record::new();
                for (key, value) in map {
                    rec.insert(key, Value::from(value));
                }
                Value::Record(rec)
            }
        }
    }
}

/// JSON view of a value: `Undefined` flattens to null, tokens render as
/// their display form, records expose own string-named entries only.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => {
                // Integral doubles print as integers, like the JSON they
                // usually came from.
                if n.fract() == 0.0 && n.is_finite() && n.abs() < i64::MAX as f64 {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            Value::String(s) => serializer.serialize_str(s),
            Value::Token(token) => serializer.collect_str(token),
            Value::Array(items) => serializer.collect_seq(items),
            Value::Record(rec) => {
                let mut map = serializer.serialize_map(None)?;
                for (key, value) in rec.own_entries() {
                    if let PropKey::Name(name) = key {
                        map.serialize_entry(name, value)?;
                    }
                }
                map.end()
            }
        }
    }
}
