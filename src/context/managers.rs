//! Named auxiliary managers carried by a request context.
//!
//! Managers are cross-cutting collaborators (audit, auth, metrics, ...) that
//! downstream code looks up by name. The service operations themselves never
//! require one.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A collaborator that can be registered on a [`RequestContext`](super::RequestContext).
pub trait Manager: Any + Send + Sync {
    /// Name under which the manager is registered by default.
    fn name(&self) -> &str;
}

#[derive(Clone)]
struct ManagerEntry {
    manager: Arc<dyn Manager>,
    // Same allocation as `manager`, kept for typed lookups.
    any: Arc<dyn Any + Send + Sync>,
}

/// Name-keyed registry of managers.
#[derive(Clone, Default)]
pub struct ManagerRegistry {
    entries: HashMap<String, ManagerEntry>,
}

impl ManagerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a manager under its own name, replacing any previous entry.
    pub fn register<M: Manager>(&mut self, manager: M) {
        let name = manager.name().to_string();
        self.register_named(name, manager);
    }

    /// Register a manager under an explicit name, replacing any previous entry.
    pub fn register_named<M: Manager>(&mut self, name: impl Into<String>, manager: M) {
        let manager = Arc::new(manager);
        let entry = ManagerEntry {
            manager: manager.clone(),
            any: manager,
        };
        self.entries.insert(name.into(), entry);
    }

    /// Look up a manager by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Manager>> {
        self.entries.get(name).map(|entry| entry.manager.clone())
    }

    /// Look up a manager by name and downcast it to its concrete type.
    pub fn get_as<M: Manager>(&self, name: &str) -> Option<Arc<M>> {
        self.entries
            .get(name)
            .and_then(|entry| entry.any.clone().downcast::<M>().ok())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ManagerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagerRegistry")
            .field("names", &self.names())
            .finish()
    }
}
