//! Edge Attributes
//!
//! Every edge carries a mapping from attribute name to a numeric weight.
//! Attributes need not be uniform: one edge may have `distance` and `time`,
//! another only `distance`.
//!
//! The [`AttributeTable`] owns the mapping for every edge, keyed by
//! [`EdgeId`], and keeps the graph-wide set of attribute names in use.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::counts::{KeySet, RefCounts};
use super::edges::EdgeId;

/// Named weights attached to a single edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeAttributes(IndexMap<String, f64>);

impl EdgeAttributes {
    /// Create an empty attribute mapping.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    /// Set an attribute, returning its previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.0.insert(name.into(), value)
    }

    /// Get an attribute's value, if this edge carries it.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    /// The cost of traversing this edge under `name`.
    ///
    /// An edge lacking the attribute costs nothing for it.
    pub fn cost(&self, name: &str) -> f64 {
        self.get(name).unwrap_or(0.0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First attribute whose value is not a finite number.
    pub(crate) fn first_non_finite(&self) -> Option<(&str, f64)> {
        self.iter().find(|(_, value)| !value.is_finite())
    }
}

impl<K: Into<String>, const M: usize> From<[(K, f64); M]> for EdgeAttributes {
    fn from(pairs: [(K, f64); M]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<IndexMap<String, f64>> for EdgeAttributes {
    fn from(map: IndexMap<String, f64>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for EdgeAttributes {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, value)| (name.into(), value)).collect())
    }
}

/// Per-edge attribute storage plus the set of attribute names in use.
#[derive(Debug, Clone, Default)]
pub struct AttributeTable {
    /// Attributes of every live edge.
    edges: HashMap<EdgeId, EdgeAttributes>,

    /// Attribute name -> number of edges carrying it.
    names: RefCounts<String>,
}

impl AttributeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `attributes` into the edge's mapping.
    ///
    /// Names already on the edge are overwritten, new names are added and
    /// names absent from `attributes` are kept. The edge gets an (empty)
    /// entry even when `attributes` is empty.
    pub fn merge(&mut self, id: EdgeId, attributes: EdgeAttributes) {
        let entry = self.edges.entry(id).or_default();
        for (name, value) in attributes.0 {
            if !entry.contains(&name) {
                self.names.acquire(name.clone());
            }
            entry.0.insert(name, value);
        }
    }

    /// Remove an edge's attributes, releasing the names it carried.
    pub fn remove(&mut self, id: EdgeId) -> Option<EdgeAttributes> {
        let attributes = self.edges.remove(&id)?;
        for name in attributes.names() {
            self.names.release(name);
        }
        Some(attributes)
    }

    pub fn get(&self, id: EdgeId) -> Option<&EdgeAttributes> {
        self.edges.get(&id)
    }

    /// Attribute names used by at least one edge.
    pub fn names(&self) -> KeySet<'_, String> {
        self.names.keys()
    }
}
