//! Memoization of rendered expressions.
//!
//! The renderer only needs lookups and insertions, so any map keyed by the input text can be
//! used. The cache is owned by the caller, and shared across calls for as long as the caller
//! likes (such as one compilation, or one REPL session).

use std::collections::{BTreeMap, HashMap};

/// A cache of rendered expressions, keyed by [`cache_key`].
pub trait RenderCache {
    /// Returns the cached output for the given key.
    fn get(&self, key: &str) -> Option<&str>;

    /// Stores the output for the given key.
    fn insert(&mut self, key: String, value: String);
}

impl RenderCache for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }

    fn insert(&mut self, key: String, value: String) {
        HashMap::insert(self, key, value);
    }
}

impl RenderCache for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        BTreeMap::get(self, key).map(String::as_str)
    }

    fn insert(&mut self, key: String, value: String) {
        BTreeMap::insert(self, key, value);
    }
}

/// Returns the cache key of the given input.
///
/// Output in partial simplification mode differs from markup output, so its keys are prefixed
/// with `~`, which cannot begin an expression.
pub fn cache_key(input: &str, partial_simplify: bool) -> String {
    if partial_simplify {
        format!("~{}", input)
    } else {
        input.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn keys_by_mode() {
        assert_eq!(cache_key("x+1", false), "x+1");
        assert_eq!(cache_key("x+1", true), "~x+1");
    }

    #[test]
    fn map_caches() {
        let mut cache = HashMap::new();
        RenderCache::insert(&mut cache, "a".to_owned(), "b".to_owned());
        assert_eq!(RenderCache::get(&cache, "a"), Some("b"));
        assert_eq!(RenderCache::get(&cache, "c"), None);
    }
}
