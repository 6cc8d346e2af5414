//! Edge Index
//!
//! This module stores the directed edges themselves: an adjacency map from
//! each source to its targets, plus the counted node sets that back
//! `source_nodes` and `target_nodes`.

use std::hash::Hash;

use indexmap::IndexMap;

use super::counts::{KeySet, RefCounts};

/// Identifier of an edge within one graph.
///
/// Ids are never reused: re-adding a removed edge gets a fresh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Get the raw ID value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Directed edges with adjacency and node-set bookkeeping.
#[derive(Debug, Clone)]
pub struct EdgeIndex<N> {
    /// Source -> (target -> edge id), in insertion order.
    outgoing: IndexMap<N, IndexMap<N, EdgeId>>,

    /// Nodes with at least one outgoing edge, counted by out-degree.
    sources: RefCounts<N>,

    /// Nodes with at least one incoming edge, counted by in-degree.
    targets: RefCounts<N>,

    next_id: u64,
    len: usize,
}

impl<N: Clone + Hash + Eq> EdgeIndex<N> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            outgoing: IndexMap::new(),
            sources: RefCounts::new(),
            targets: RefCounts::new(),
            next_id: 0,
            len: 0,
        }
    }

    /// Insert the edge `source -> target`.
    ///
    /// Returns the edge's id and whether it was newly created. Inserting an
    /// existing pair returns its current id.
    pub fn insert(&mut self, source: N, target: N) -> (EdgeId, bool) {
        if let Some(id) = self.get(&source, &target) {
            return (id, false);
        }

        let id = EdgeId(self.next_id);
        self.next_id += 1;
        self.len += 1;

        self.sources.acquire(source.clone());
        self.targets.acquire(target.clone());
        self.outgoing.entry(source).or_default().insert(target, id);

        (id, true)
    }

    /// Remove the edge `source -> target`, returning its id.
    pub fn remove(&mut self, source: &N, target: &N) -> Option<EdgeId> {
        let targets = self.outgoing.get_mut(source)?;
        let id = targets.shift_remove(target)?;
        if targets.is_empty() {
            self.outgoing.swap_remove(source);
        }

        self.sources.release(source);
        self.targets.release(target);
        self.len -= 1;

        Some(id)
    }

    pub fn get(&self, source: &N, target: &N) -> Option<EdgeId> {
        self.outgoing.get(source)?.get(target).copied()
    }

    pub fn contains(&self, source: &N, target: &N) -> bool {
        self.get(source, target).is_some()
    }

    /// Targets of the edges leaving `node`, in insertion order.
    pub fn successors<'a>(&'a self, node: &N) -> impl Iterator<Item = (&'a N, EdgeId)> + 'a {
        self.outgoing
            .get(node)
            .into_iter()
            .flat_map(|targets| targets.iter().map(|(target, id)| (target, *id)))
    }

    /// Whether `node` is the endpoint of any edge.
    pub fn touches(&self, node: &N) -> bool {
        self.sources.keys().contains(node) || self.targets.keys().contains(node)
    }

    pub fn sources(&self) -> KeySet<'_, N> {
        self.sources.keys()
    }

    pub fn targets(&self) -> KeySet<'_, N> {
        self.targets.keys()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<N: Clone + Hash + Eq> Default for EdgeIndex<N> {
    fn default() -> Self {
        Self::new()
    }
}
