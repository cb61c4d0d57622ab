//! Path tokenizer for the nested-value resolver
//!
//! Supports:
//! - a.b.c (dot notation)
//! - a[0].b and a[0][2] (array index, repeatable per segment)
//! - a["k"] / a['k'] (quoted name index; the name must not contain dots)
//! - pre-split key sequences, passed through untouched
//!
//! Does NOT support:
//! - Wildcards: a[*]
//! - Slices: a[0:5]
//! - Write paths of any kind
//!
//! Empty dot segments (leading, trailing, repeated delimiters) are skipped
//! rather than emitted as empty-string keys. A malformed bracket group fails
//! the whole path; the resolver turns that failure into its default result.

use thiserror::Error;

use crate::value::Token;

/// One atomic traversal step.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    /// Property name: dot segment, quoted bracket segment, or any string
    /// element of a pre-split sequence.
    Name(String),
    /// Array index: numeric bracket segment `[n]`.
    Index(usize),
    /// Opaque identity token, matched by identity only.
    Token(Token),
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl From<Token> for Key {
    fn from(token: Token) -> Self {
        Key::Token(token)
    }
}

/// Malformed path text. Only the string form can fail; key sequences are
/// taken as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("unterminated bracket group in path '{path}'")]
    UnterminatedBracket { path: String },

    #[error("empty bracket group in path '{path}'")]
    EmptyBracket { path: String },

    #[error("bracket group '[{segment}]' in path '{path}' is neither an index nor a quoted name")]
    InvalidBracket { segment: String, path: String },

    #[error("unexpected text after ']' in path '{path}'")]
    TrailingText { path: String },
}

/// A raw path as accepted by the resolver: delimited text, a pre-split key
/// sequence, or a single key.
#[derive(Debug, Clone)]
pub enum PathInput {
    Text(String),
    Keys(Vec<Key>),
}

impl PathInput {
    /// Normalize to the ordered key sequence the traversal engine consumes.
    ///
    /// Sequence elements pass through unchanged; in particular a sequence
    /// element containing dots is one key, never re-split.
    pub fn into_keys(self) -> Result<Vec<Key>, PathError> {
        match self {
            PathInput::Text(text) => parse(&text),
            PathInput::Keys(keys) => Ok(keys),
        }
    }
}

impl From<&str> for PathInput {
    fn from(text: &str) -> Self {
        PathInput::Text(text.to_string())
    }
}

impl From<String> for PathInput {
    fn from(text: String) -> Self {
        PathInput::Text(text)
    }
}

impl From<Vec<Key>> for PathInput {
    fn from(keys: Vec<Key>) -> Self {
        PathInput::Keys(keys)
    }
}

impl From<&[Key]> for PathInput {
    fn from(keys: &[Key]) -> Self {
        PathInput::Keys(keys.to_vec())
    }
}

impl From<Key> for PathInput {
    fn from(key: Key) -> Self {
        PathInput::Keys(vec![key])
    }
}

impl From<Token> for PathInput {
    fn from(token: Token) -> Self {
        PathInput::Keys(vec![Key::Token(token)])
    }
}

impl<K: Into<Key>, const N: usize> From<[K; N]> for PathInput {
    fn from(keys: [K; N]) -> Self {
        PathInput::Keys(keys.into_iter().map(Into::into).collect())
    }
}

/// Parse delimited path text into keys.
///
/// Examples:
/// - "a.b.c" → [Name(a), Name(b), Name(c)]
/// - "a[0][2].b" → [Name(a), Index(0), Index(2), Name(b)]
/// - "a.0" → [Name(a), Name(0)] (the adapters decide index interpretation)
pub fn parse(text: &str) -> Result<Vec<Key>, PathError> {
    let mut keys = Vec::new();
    for segment in text.split('.') {
        if segment.is_empty() {
            continue;
        }
        parse_segment(segment, text, &mut keys)?;
    }
    Ok(keys)
}

/// One dot segment: an optional leading name followed by any number of
/// bracket groups.
fn parse_segment(segment: &str, path: &str, keys: &mut Vec<Key>) -> Result<(), PathError> {
    let head_end = segment.find('[').unwrap_or(segment.len());
    let head = &segment[..head_end];
    if !head.is_empty() {
        keys.push(Key::Name(head.to_string()));
    }

    let mut rest = &segment[head_end..];
    while !rest.is_empty() {
        if !rest.starts_with('[') {
            return Err(PathError::TrailingText {
                path: path.to_string(),
            });
        }
        let close = rest.find(']').ok_or_else(|| PathError::UnterminatedBracket {
            path: path.to_string(),
        })?;
        keys.push(parse_bracket(&rest[1..close], path)?);
        rest = &rest[close + 1..];
    }
    Ok(())
}

fn parse_bracket(inner: &str, path: &str) -> Result<Key, PathError> {
    if inner.is_empty() {
        return Err(PathError::EmptyBracket {
            path: path.to_string(),
        });
    }

    // Quoted name: ["k"] or ['k']
    let bytes = inner.as_bytes();
    if inner.len() >= 2 && (bytes[0] == b'"' || bytes[0] == b'\'') && bytes[inner.len() - 1] == bytes[0]
    {
        return Ok(Key::Name(inner[1..inner.len() - 1].to_string()));
    }

    inner
        .parse::<usize>()
        .map(Key::Index)
        .map_err(|_| PathError::InvalidBracket {
            segment: inner.to_string(),
            path: path.to_string(),
        })
}
