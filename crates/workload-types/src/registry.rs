//! Uniqueness registry for generated keys.

use std::collections::HashSet;
use std::hash::Hash;

/// Tracks every key assigned during a generation run.
///
/// The dataset builder and the query synthesizer reject candidate keys that
/// are already registered. Keys are never released for the lifetime of a
/// run; there is no removal operation.
#[derive(Debug, Clone)]
pub struct KeyRegistry<T> {
    keys: HashSet<T>,
}

impl<T: Copy + Eq + Hash> KeyRegistry<T> {
    pub fn new() -> Self {
        Self {
            keys: HashSet::new(),
        }
    }

    /// Create a registry sized for an expected number of keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: HashSet::with_capacity(capacity),
        }
    }

    /// True if `key` has already been assigned.
    pub fn contains(&self, key: &T) -> bool {
        self.keys.contains(key)
    }

    /// Register `key`. Returns false if it was already present.
    pub fn insert(&mut self, key: T) -> bool {
        self.keys.insert(key)
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<T: Copy + Eq + Hash> Default for KeyRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut registry = KeyRegistry::new();
        assert!(!registry.contains(&42i32));
        assert!(registry.insert(42));
        assert!(registry.contains(&42));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_insert() {
        let mut registry = KeyRegistry::new();
        assert!(registry.insert(7u64));
        assert!(!registry.insert(7));
        assert_eq!(registry.len(), 1);
    }
}
