// src/ducks/registry.rs
//! Insertion-ordered duck registry
//!
//! Registry order is chain order, so it must be stable. Re-inserting an
//! existing key replaces the duck but keeps its original position.

use crate::ducks::duck::Duck;
use indexmap::IndexMap;
use std::fmt;
use tracing::debug;

/// Mapping from unique keys to ducks, iterated in insertion order
pub struct DuckRegistry<S, A> {
    ducks: IndexMap<String, Duck<S, A>>,
}

impl<S, A> DuckRegistry<S, A> {
    pub fn new() -> Self {
        Self {
            ducks: IndexMap::new(),
        }
    }

    /// Builder form of [`DuckRegistry::insert`]
    pub fn with(mut self, key: impl Into<String>, duck: Duck<S, A>) -> Self {
        self.insert(key, duck);
        self
    }

    /// Register a duck, returning the one previously stored under `key`
    pub fn insert(&mut self, key: impl Into<String>, duck: Duck<S, A>) -> Option<Duck<S, A>> {
        let key = key.into();
        debug!(
            "Registering duck '{}' (middleware: {})",
            key,
            duck.has_middleware()
        );
        self.ducks.insert(key, duck)
    }

    /// Remove a duck; the remaining ducks keep their relative order
    pub fn remove(&mut self, key: &str) -> Option<Duck<S, A>> {
        self.ducks.shift_remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Duck<S, A>> {
        self.ducks.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.ducks.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.ducks.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Duck<S, A>)> {
        self.ducks.iter().map(|(key, duck)| (key.as_str(), duck))
    }

    pub fn len(&self) -> usize {
        self.ducks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ducks.is_empty()
    }

    /// Number of ducks that contribute an interceptor
    pub fn interceptor_count(&self) -> usize {
        self.ducks.values().filter(|duck| duck.has_middleware()).count()
    }
}

impl<S, A> Default for DuckRegistry<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Clone for DuckRegistry<S, A> {
    fn clone(&self) -> Self {
        Self {
            ducks: self.ducks.clone(),
        }
    }
}

impl<S, A> fmt::Debug for DuckRegistry<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.ducks.iter()).finish()
    }
}

impl<S, A, K: Into<String>> FromIterator<(K, Duck<S, A>)> for DuckRegistry<S, A> {
    fn from_iter<I: IntoIterator<Item = (K, Duck<S, A>)>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl<S, A, K: Into<String>> Extend<(K, Duck<S, A>)> for DuckRegistry<S, A> {
    fn extend<I: IntoIterator<Item = (K, Duck<S, A>)>>(&mut self, iter: I) {
        for (key, duck) in iter {
            self.insert(key, duck);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::Middleware;

    type TestRegistry = DuckRegistry<i64, u32>;

    fn keys(registry: &TestRegistry) -> Vec<&str> {
        registry.keys().collect()
    }

    #[test]
    fn test_insertion_order() {
        let registry = TestRegistry::new()
            .with("zeta", Duck::new())
            .with("alpha", Duck::new())
            .with("mid", Duck::new());

        assert_eq!(keys(&registry), vec!["zeta", "alpha", "mid"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut registry = TestRegistry::new()
            .with("a", Duck::new())
            .with("b", Duck::new())
            .with("c", Duck::new());

        let previous = registry.insert("a", Middleware::passthrough().into());

        assert!(previous.is_some_and(|duck| !duck.has_middleware()));
        assert_eq!(keys(&registry), vec!["a", "b", "c"]);
        assert!(registry.get("a").unwrap().has_middleware());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut registry: TestRegistry = vec![
            ("a", Duck::new()),
            ("b", Duck::new()),
            ("c", Duck::new()),
            ("d", Duck::new()),
        ]
        .into_iter()
        .collect();

        assert!(registry.remove("b").is_some());
        assert!(registry.remove("missing").is_none());

        assert_eq!(keys(&registry), vec!["a", "c", "d"]);
        assert!(!registry.contains_key("b"));
    }

    #[test]
    fn test_interceptor_count() {
        let registry = TestRegistry::new()
            .with("inert", Duck::new())
            .with("active", Middleware::passthrough().into());

        assert_eq!(registry.interceptor_count(), 1);
        assert!(!registry.is_empty());
        assert!(TestRegistry::default().is_empty());
    }
}
