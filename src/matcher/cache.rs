use super::{join_template, Matcher};
use crate::error::RouteError;

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Compiled matchers keyed by their full template.
///
/// Shared by every [`Dispatcher`](crate::Dispatcher) of a server so that a
/// route declared inside a request handler is compiled only once.
#[derive(Debug, Default)]
pub struct MatcherCache {
    map: RwLock<HashMap<Box<str>, Arc<Matcher>>>,
}

impl MatcherCache {
    pub fn new() -> Self {
        Self {
            map: RwLock::new(HashMap::new()),
        }
    }

    pub fn get_or_compile(
        &self,
        prefix: Option<&str>,
        route: &str,
    ) -> Result<Arc<Matcher>, RouteError> {
        let key = join_template(prefix, route);

        {
            let map = self.map.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(m) = map.get(key.as_str()) {
                tracing::trace!(template = %key, "matcher cache hit");
                return Ok(Arc::clone(m));
            }
        }

        let matcher = Arc::new(Matcher::compile(None, &key)?);
        let mut map = self.map.write().unwrap_or_else(PoisonError::into_inner);
        let m = map.entry(key.into_boxed_str()).or_insert(matcher);
        Ok(Arc::clone(m))
    }

    pub fn len(&self) -> usize {
        self.map.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.map
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_once() {
        let cache = MatcherCache::new();
        let a = cache.get_or_compile(Some("/api"), "users/<id:int>").unwrap();
        let b = cache.get_or_compile(Some("/api"), "/users/<id:int>").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);

        let c = cache.get_or_compile(None, "/users/<id:int>").unwrap();
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn errors_are_not_cached() {
        let cache = MatcherCache::new();
        assert!(cache.get_or_compile(None, "/<a>/<a>").is_err());
        assert!(cache.is_empty());
    }
}
