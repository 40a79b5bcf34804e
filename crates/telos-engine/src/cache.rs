//! # Definition Cache
//!
//! Read-through cache over a [`DefinitionStore`]. Loading a definition
//! is pure and idempotent, so the miss path deliberately recomputes
//! outside the lock and overwrites on insert — two callers racing on
//! the same miss both do the work and agree on the result. The write
//! lock is held only for the map operation, never across store I/O.
//!
//! Negative results are not cached: a definition created after a miss
//! becomes visible on the next lookup.
//!
//! [`DefinitionStore`]: crate::store::DefinitionStore

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use telos_schema::FunctionDefinition;

use crate::store::{DefinitionStore, StoreError};

/// Name-keyed read-through cache of loaded definitions.
#[derive(Debug, Default)]
pub struct DefinitionCache {
    entries: RwLock<HashMap<String, Arc<FunctionDefinition>>>,
}

impl DefinitionCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `name`, reading through to `store` on a miss.
    ///
    /// `Ok(None)` means the store has no such definition.
    pub fn get_or_load(
        &self,
        name: &str,
        store: &dyn DefinitionStore,
    ) -> Result<Option<Arc<FunctionDefinition>>, StoreError> {
        if let Some(definition) = self.entries.read().get(name) {
            return Ok(Some(Arc::clone(definition)));
        }

        match store.get(name)? {
            None => Ok(None),
            Some(definition) => {
                let definition = Arc::new(definition);
                self.entries
                    .write()
                    .insert(name.to_string(), Arc::clone(&definition));
                Ok(Some(definition))
            }
        }
    }

    /// Drop one cached entry.
    pub fn invalidate(&self, name: &str) {
        self.entries.write().remove(name);
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Number of cached definitions.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    fn store() -> MemoryStore {
        let definition = serde_json::from_value(json!({
            "name": "salute",
            "parameters": [{"name": "who", "type": "text"}],
            "reference": "demo.salute",
            "response": {"msg": "text"},
        }))
        .unwrap();
        [definition].into_iter().collect()
    }

    #[test]
    fn miss_populates_then_hits() {
        let cache = DefinitionCache::new();
        let store = store();
        assert!(cache.is_empty());
        assert!(cache.get_or_load("salute", &store).unwrap().is_some());
        assert_eq!(cache.len(), 1);

        // A hit returns the same Arc without consulting the store.
        let empty = MemoryStore::new();
        assert!(cache.get_or_load("salute", &empty).unwrap().is_some());
    }

    #[test]
    fn negative_results_are_not_cached() {
        let cache = DefinitionCache::new();
        assert!(cache
            .get_or_load("salute", &MemoryStore::new())
            .unwrap()
            .is_none());
        // The definition appears later; the next lookup sees it.
        assert!(cache.get_or_load("salute", &store()).unwrap().is_some());
    }

    #[test]
    fn invalidate_forces_reload() {
        let cache = DefinitionCache::new();
        let store = store();
        cache.get_or_load("salute", &store).unwrap();
        cache.invalidate("salute");
        assert!(cache.is_empty());
        assert!(cache.get_or_load("salute", &store).unwrap().is_some());
    }
}
