//! Generic caching decorator for pure unary functions
//!
//! Wraps an `Fn(&Value) -> Value` and serves repeat calls from a lock-free
//! `DashMap` cache, keyed by a resolver function over the argument. The
//! default resolver is the argument's canonical JSON encoding; callers with
//! sharper identity notions (or arguments that collide under the JSON view)
//! supply their own via [`Memoized::with_resolver`]. The cache is exposed
//! for inspection and invalidation.
//!
//! Binary functions memoize by capturing the extra argument in a closure;
//! the decorator itself stays unary.

use dashmap::DashMap;
use tracing::trace;

use crate::value::Value;

/// Canonical JSON encoding of the argument. Tokens key by their display
/// form, which embeds the identity id.
fn canonical_key(arg: &Value) -> String {
    serde_json::to_string(arg).unwrap_or_else(|_| format!("{arg:?}"))
}

/// A memoized wrapper around a pure function.
pub struct Memoized<F, K = fn(&Value) -> String>
where
    F: Fn(&Value) -> Value,
    K: Fn(&Value) -> String,
{
    func: F,
    key_fn: K,
    cache: DashMap<String, Value>,
}

impl<F> Memoized<F>
where
    F: Fn(&Value) -> Value,
{
    /// Memoize `func` with the canonical-JSON key resolver.
    pub fn new(func: F) -> Self {
        Self {
            func,
            key_fn: canonical_key,
            cache: DashMap::new(),
        }
    }
}

impl<F, K> Memoized<F, K>
where
    F: Fn(&Value) -> Value,
    K: Fn(&Value) -> String,
{
    /// Memoize `func`, deriving cache keys with `key_fn`.
    pub fn with_resolver(func: F, key_fn: K) -> Self {
        Self {
            func,
            key_fn,
            cache: DashMap::new(),
        }
    }

    /// Invoke the wrapped function, or serve the cached result for this key.
    pub fn call(&self, arg: &Value) -> Value {
        let key = (self.key_fn)(arg);
        if let Some(hit) = self.cache.get(&key) {
            trace!(%key, "memoize cache hit");
            return hit.clone();
        }

        let result = (self.func)(arg);
        self.cache.insert(key, result.clone());
        result
    }

    /// Number of cached results.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Whether a result is cached for `arg`'s key.
    pub fn cache_contains(&self, arg: &Value) -> bool {
        self.cache.contains_key(&(self.key_fn)(arg))
    }

    /// Drop every cached result.
    pub fn cache_clear(&self) {
        self.cache.clear();
    }
}
