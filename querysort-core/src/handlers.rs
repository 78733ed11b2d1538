//! Per-model handler tables.
//!
//! A [`SortSpec`] maps request-facing sort keys to closures that mutate a
//! query. Handlers receive an already-normalized [`SortDirection`], so they
//! never see raw request input.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use querysort_model::SortDirection;
use tracing::trace;

/// Query mutation registered for one sort key.
pub type SortHandler<Q> = Arc<dyn Fn(&mut Q, SortDirection) + Send + Sync>;

/// Mapping from sort key to handler for a query type `Q`.
///
/// The table sits behind an [`Arc`], so cloning a spec is a reference-count
/// bump. Registering on a clone copies the table first and leaves the
/// original untouched.
pub struct SortSpec<Q> {
    handlers: Arc<HashMap<String, SortHandler<Q>>>,
}

impl<Q> SortSpec<Q> {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(HashMap::new()),
        }
    }

    /// Builder-style registration. A key registered twice keeps the later handler.
    pub fn on<F>(mut self, key: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut Q, SortDirection) + Send + Sync + 'static,
    {
        self.insert(key, handler);
        self
    }

    pub fn insert<F>(&mut self, key: impl Into<String>, handler: F) -> Option<SortHandler<Q>>
    where
        F: Fn(&mut Q, SortDirection) + Send + Sync + 'static,
    {
        Arc::make_mut(&mut self.handlers).insert(key.into(), Arc::new(handler))
    }

    pub fn get(&self, key: &str) -> Option<&SortHandler<Q>> {
        self.handlers.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.handlers.contains_key(key)
    }

    /// Registered keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run the handler for `key` against `query`.
    ///
    /// Returns `false` without touching the query when the key is unknown.
    pub fn apply(&self, query: &mut Q, key: &str, direction: SortDirection) -> bool {
        match self.handlers.get(key) {
            Some(handler) => {
                trace!(key, direction = direction.as_str(), "applying sort handler");
                handler(query, direction);
                true
            }
            None => false,
        }
    }
}

impl<Q> Default for SortSpec<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q> Clone for SortSpec<Q> {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
        }
    }
}

impl<Q> fmt::Debug for SortSpec<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        f.debug_struct("SortSpec").field("keys", &keys).finish()
    }
}
