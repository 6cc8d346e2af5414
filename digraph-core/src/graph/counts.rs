//! Reference Counts
//!
//! `source_nodes`, `target_nodes` and `weights` are all "keys referenced by at
//! least one edge". Each is kept as a counted key set so that removing an edge
//! drops a key in O(1) instead of rescanning every remaining edge.

use std::borrow::Borrow;
use std::hash::Hash;

use indexmap::IndexMap;

/// A set of keys, each with the number of edges referencing it.
#[derive(Debug, Clone)]
pub(crate) struct RefCounts<K> {
    counts: IndexMap<K, usize>,
}

impl<K: Hash + Eq> RefCounts<K> {
    pub(crate) fn new() -> Self {
        Self {
            counts: IndexMap::new(),
        }
    }

    /// Add one reference. Returns true if the key was not present before.
    pub(crate) fn acquire(&mut self, key: K) -> bool {
        let count = self.counts.entry(key).or_insert(0);
        *count += 1;
        *count == 1
    }

    /// Drop one reference. Returns true if this was the last one.
    pub(crate) fn release<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(count) = self.counts.get_mut(key) else {
            return false;
        };
        *count -= 1;
        if *count > 0 {
            return false;
        }
        self.counts.swap_remove(key);
        true
    }

    pub(crate) fn keys(&self) -> KeySet<'_, K> {
        KeySet {
            counts: &self.counts,
        }
    }
}

impl<K: Hash + Eq> Default for RefCounts<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view over the keys currently referenced by the graph.
///
/// Iteration follows first-reference order; removing a key moves the last
/// key into its slot, so the order stays deterministic.
#[derive(Debug)]
pub struct KeySet<'a, K> {
    counts: &'a IndexMap<K, usize>,
}

impl<K> Clone for KeySet<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for KeySet<'_, K> {}

impl<'a, K: Hash + Eq> KeySet<'a, K> {
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.contains_key(key)
    }

    /// Number of edges referencing `key` (zero if absent).
    pub fn references<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> indexmap::map::Keys<'a, K, usize> {
        self.counts.keys()
    }
}

impl<'a, K> IntoIterator for KeySet<'a, K> {
    type Item = &'a K;
    type IntoIter = indexmap::map::Keys<'a, K, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.keys()
    }
}
