//! Named element filters
//!
//! Reusable predicates registered once under a name and applied to
//! arbitrary element collections, independent of any particular operation.
//! The scroll feature registers its `scrollable` classifier here.

use std::sync::{Arc, RwLock};

use rustc_hash::FxHashMap;

use scrollin_core::ElementId;

use crate::document::Document;

/// A named element predicate.
pub type FilterFn = Arc<dyn Fn(&Document, ElementId) -> bool + Send + Sync>;

/// Registry of named filters.
///
/// Registration replaces (last wins); lookups clone the `Arc` so predicates
/// run without holding the registry lock.
#[derive(Default)]
pub struct FilterRegistry {
    filters: RwLock<FxHashMap<String, FilterFn>>,
}

impl std::fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterRegistry")
            .field("names", &self.names())
            .finish()
    }
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a filter under a name. An existing filter with the same
    /// name is replaced (last wins).
    pub fn register<F>(&self, name: impl Into<String>, filter: F)
    where
        F: Fn(&Document, ElementId) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        if let Ok(mut filters) = self.filters.write() {
            if filters.insert(name.clone(), Arc::new(filter)).is_some() {
                tracing::debug!("replaced element filter '{}'", name);
            }
        }
    }

    /// Look up a filter by name.
    pub fn get(&self, name: &str) -> Option<FilterFn> {
        self.filters.read().ok()?.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.filters
            .read()
            .ok()
            .is_some_and(|filters| filters.contains_key(name))
    }

    /// Registered filter names (unordered).
    pub fn names(&self) -> Vec<String> {
        self.filters
            .read()
            .ok()
            .map(|filters| filters.keys().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let registry = FilterRegistry::new();
        registry.register("anything", |_, _| true);

        assert!(registry.contains("anything"));
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_last_registration_wins() {
        let registry = FilterRegistry::new();
        let doc = Document::new();

        registry.register("pick", |_, _| true);
        registry.register("pick", |_, _| false);

        let filter = registry.get("pick").unwrap();
        assert!(!filter(&doc, doc.root()));
    }
}
