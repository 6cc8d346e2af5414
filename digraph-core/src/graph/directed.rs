//! Directed Graph
//!
//! [`DirectedGraph`] composes the [`EdgeIndex`] and the [`AttributeTable`]
//! and is the entry point for every query. Path searches live in
//! `crate::search`, subset expansion in `crate::subset`.

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexSet;
use tracing::{debug, warn};

use super::attributes::{AttributeTable, EdgeAttributes};
use super::counts::KeySet;
use super::edges::EdgeIndex;
use crate::error::{GraphError, Result};

/// Bounds every node identifier must satisfy.
///
/// Implemented for any `Clone + Eq + Hash + Debug` type, so `String`,
/// `&str` and integer ids all work.
pub trait GraphNode: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> GraphNode for T {}

/// A directed graph whose edges carry named numeric weights.
///
/// # Example
///
/// ```
/// use digraph_core::DirectedGraph;
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge("u", "v", [("weight", 10.0)]).unwrap();
/// graph.add_edge("v", "w", [("weight", 13.0)]).unwrap();
///
/// assert!(graph.exists_edge(&"u", &"v"));
/// assert_eq!(graph.dijkstra_trip_length(&"u", &"w", "weight").unwrap(), 23.0);
/// ```
#[derive(Debug, Clone)]
pub struct DirectedGraph<N: GraphNode> {
    edges: EdgeIndex<N>,
    attributes: AttributeTable,

    /// Nodes added explicitly with `add_node`.
    placeholders: IndexSet<N>,
}

impl<N: GraphNode> DirectedGraph<N> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            edges: EdgeIndex::new(),
            attributes: AttributeTable::new(),
            placeholders: IndexSet::new(),
        }
    }

    /// Build a graph from `(source, target, attributes)` triples, failing
    /// on the first invalid one.
    pub fn from_edges<I, A>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, N, A)>,
        A: Into<EdgeAttributes>,
    {
        let mut graph = Self::new();
        graph.try_extend(edges)?;
        Ok(graph)
    }

    /// Add every triple in order, stopping at the first one `add_edge`
    /// rejects. Edges added before it stay in the graph.
    pub fn try_extend<I, A>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = (N, N, A)>,
        A: Into<EdgeAttributes>,
    {
        for (source, target, attributes) in edges {
            self.add_edge(source, target, attributes)?;
        }
        Ok(())
    }

    /// Insert the edge `source -> target`, merging `attributes` into any
    /// attributes it already has.
    ///
    /// Fails with [`GraphError::InvalidWeight`] if a value is NaN or
    /// infinite; the graph is left untouched in that case.
    pub fn add_edge(
        &mut self,
        source: N,
        target: N,
        attributes: impl Into<EdgeAttributes>,
    ) -> Result<()> {
        let attributes = attributes.into();
        if let Some((name, value)) = attributes.first_non_finite() {
            return Err(GraphError::InvalidWeight {
                attribute: name.to_string(),
                value,
            });
        }

        self.insert_edge(source, target, attributes);
        Ok(())
    }

    fn insert_edge(&mut self, source: N, target: N, attributes: EdgeAttributes) {
        debug!(?source, ?target, attributes = attributes.len(), "adding edge");
        let (id, _) = self.edges.insert(source, target);
        self.attributes.merge(id, attributes);
    }

    /// Remove the edge `source -> target`, returning its attributes.
    ///
    /// Nodes and attribute names no longer referenced by any edge disappear
    /// from `source_nodes`, `target_nodes` and `weights`.
    pub fn remove_edge(&mut self, source: &N, target: &N) -> Result<EdgeAttributes> {
        let id = self
            .edges
            .remove(source, target)
            .ok_or_else(|| GraphError::edge_not_found(source, target))?;
        debug!(?source, ?target, "removed edge");
        Ok(self.attributes.remove(id).unwrap_or_default())
    }

    /// Register a node without any edge.
    ///
    /// Returns false if the node was already known.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.contains_node(&node) {
            return false;
        }
        debug!(?node, "adding node");
        self.placeholders.insert(node)
    }

    pub fn exists_edge(&self, source: &N, target: &N) -> bool {
        self.edges.contains(source, target)
    }

    /// True iff the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether `node` is an edge endpoint or an explicit placeholder.
    pub fn contains_node(&self, node: &N) -> bool {
        self.edges.touches(node) || self.placeholders.contains(node)
    }

    /// Every known node: sources, then targets, then placeholders, without
    /// duplicates.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        let sources = self.edges.sources();
        let targets = self.edges.targets();
        sources
            .iter()
            .chain(targets.iter().filter(move |node| !sources.contains(*node)))
            .chain(
                self.placeholders
                    .iter()
                    .filter(move |node| !sources.contains(*node) && !targets.contains(*node)),
            )
    }

    /// Nodes that are the source of at least one edge.
    pub fn source_nodes(&self) -> KeySet<'_, N> {
        self.edges.sources()
    }

    /// Nodes that are the target of at least one edge.
    pub fn target_nodes(&self) -> KeySet<'_, N> {
        self.edges.targets()
    }

    /// Attribute names used by at least one edge.
    pub fn weights(&self) -> KeySet<'_, String> {
        self.attributes.names()
    }

    pub fn has_weight(&self, attribute: &str) -> bool {
        self.weights().contains(attribute)
    }

    /// Outgoing edges of `node` with their attributes, in insertion order.
    pub fn successors<'a>(
        &'a self,
        node: &N,
    ) -> impl Iterator<Item = (&'a N, &'a EdgeAttributes)> + 'a {
        self.edges
            .successors(node)
            .filter_map(move |(target, id)| self.attributes.get(id).map(|attrs| (target, attrs)))
    }

    pub fn edge_attributes(&self, source: &N, target: &N) -> Option<&EdgeAttributes> {
        self.edges
            .get(source, target)
            .and_then(|id| self.attributes.get(id))
    }

    /// Weight of a single attribute on an edge.
    pub fn edge_weight(&self, source: &N, target: &N, attribute: &str) -> Option<f64> {
        self.edge_attributes(source, target)?.get(attribute)
    }

    /// Fail with [`GraphError::UnknownAttribute`] unless some edge uses
    /// `attribute`.
    pub(crate) fn require_weight(&self, attribute: &str) -> Result<()> {
        if self.has_weight(attribute) {
            Ok(())
        } else {
            Err(GraphError::UnknownAttribute(attribute.to_string()))
        }
    }
}

impl<N: GraphNode> Default for DirectedGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Triples with a NaN or infinite value are skipped with a warning; use
/// [`DirectedGraph::try_extend`] to stop on them instead.
impl<N: GraphNode, A: Into<EdgeAttributes>> Extend<(N, N, A)> for DirectedGraph<N> {
    fn extend<I: IntoIterator<Item = (N, N, A)>>(&mut self, edges: I) {
        for (source, target, attributes) in edges {
            let attributes = attributes.into();
            if let Some((name, value)) = attributes.first_non_finite() {
                warn!(?source, ?target, attribute = name, value, "skipping edge");
                continue;
            }
            self.insert_edge(source, target, attributes);
        }
    }
}

impl<N: GraphNode, A: Into<EdgeAttributes>> FromIterator<(N, N, A)> for DirectedGraph<N> {
    fn from_iter<I: IntoIterator<Item = (N, N, A)>>(edges: I) -> Self {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_graph_is_empty() {
        let graph: DirectedGraph<&str> = DirectedGraph::new();
        assert!(graph.is_empty());
        assert!(!graph.exists_edge(&"v", &"u"));
        assert!(graph.weights().is_empty());
    }

    #[test]
    fn add_edge_is_directed() {
        let mut graph = DirectedGraph::new();
        graph.add_edge("u", "v", [("weight", 10.0)]).unwrap();

        assert!(!graph.is_empty());
        assert!(graph.exists_edge(&"u", &"v"));
        assert!(!graph.exists_edge(&"v", &"u"));

        graph.add_edge("v", "u", [("weight", 9.0)]).unwrap();
        assert!(graph.exists_edge(&"v", &"u"));
        assert!(graph.exists_edge(&"u", &"v"));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn re_adding_edge_merges_attributes() {
        let mut graph = DirectedGraph::new();
        graph.add_edge("u", "v", [("weight", 10.0)]).unwrap();
        graph.add_edge("u", "v", [("height", 2.0)]).unwrap();
        graph.add_edge("u", "v", [("weight", 4.0)]).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight(&"u", &"v", "weight"), Some(4.0));
        assert_eq!(graph.edge_weight(&"u", &"v", "height"), Some(2.0));
        assert_eq!(graph.weights().len(), 2);
    }

    #[test]
    fn remove_edge_clears_node_sets_and_weights() {
        let mut graph = DirectedGraph::new();
        assert!(matches!(
            graph.remove_edge(&"u", &"v"),
            Err(GraphError::EdgeNotFound { .. })
        ));

        graph.add_edge("u", "v", [("weight", 10.0)]).unwrap();
        let removed = graph.remove_edge(&"u", &"v").unwrap();

        assert_eq!(removed.get("weight"), Some(10.0));
        assert!(graph.is_empty());
        assert!(!graph.source_nodes().contains(&"u"));
        assert!(!graph.target_nodes().contains(&"v"));
        assert_eq!(graph.weights().len(), 0);
    }

    #[test]
    fn remove_edge_keeps_shared_nodes() {
        let mut graph = DirectedGraph::new();
        graph.add_edge("u", "v", [("weight", 1.0)]).unwrap();
        graph.add_edge("u", "w", [("time", 2.0)]).unwrap();

        graph.remove_edge(&"u", &"w").unwrap();

        assert!(graph.source_nodes().contains(&"u"));
        assert!(!graph.target_nodes().contains(&"w"));
        assert!(graph.has_weight("weight"));
        assert!(!graph.has_weight("time"));
    }

    #[test]
    fn multiple_weights_on_one_edge() {
        let mut graph = DirectedGraph::new();
        graph
            .add_edge("u", "v", [("weight", 10.0), ("height", 25.0)])
            .unwrap();
        assert_eq!(graph.weights().len(), 2);
    }

    #[test]
    fn non_finite_weight_is_rejected() {
        let mut graph = DirectedGraph::new();
        let err = graph
            .add_edge("u", "v", [("weight", 1.0), ("time", f64::NAN)])
            .unwrap_err();

        assert!(matches!(err, GraphError::InvalidWeight { ref attribute, .. } if attribute == "time"));
        assert!(graph.is_empty());
        assert!(graph.weights().is_empty());

        let err = graph
            .add_edge("u", "v", [("weight", f64::NEG_INFINITY)])
            .unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { .. }));
        assert!(graph.is_empty());
    }

    #[test]
    fn negative_weights_are_accepted() {
        let mut graph = DirectedGraph::new();
        graph.add_edge("u", "v", [("weight", -3.0)]).unwrap();
        assert_eq!(graph.edge_weight(&"u", &"v", "weight"), Some(-3.0));
    }

    #[test]
    fn nodes_include_placeholders_once() {
        let mut graph = DirectedGraph::new();
        graph.add_edge("u", "v", [("weight", 1.0)]).unwrap();
        graph.add_edge("v", "u", [("weight", 1.0)]).unwrap();

        assert!(graph.add_node("lonely"));
        assert!(!graph.add_node("u"));
        assert!(!graph.add_node("lonely"));

        let nodes: Vec<_> = graph.nodes().copied().collect();
        assert_eq!(nodes, vec!["u", "v", "lonely"]);
        assert!(graph.contains_node(&"lonely"));
    }

    #[test]
    fn successors_carry_attributes() {
        let mut graph = DirectedGraph::new();
        graph.add_edge("v", "w", [("weight", 13.0)]).unwrap();
        graph.add_edge("v", "a", EdgeAttributes::new()).unwrap();

        let successors: Vec<_> = graph
            .successors(&"v")
            .map(|(target, attrs)| (*target, attrs.cost("weight")))
            .collect();
        assert_eq!(successors, vec![("w", 13.0), ("a", 0.0)]);
    }

    #[test]
    fn from_edges_builds_graph() {
        let graph = DirectedGraph::from_edges(vec![
            ("a", "b", EdgeAttributes::from([("distance", 1.0)])),
            ("b", "c", EdgeAttributes::from([("distance", 2.0)])),
        ])
        .unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.source_nodes().len(), 2);
        assert_eq!(graph.target_nodes().len(), 2);
    }

    #[test]
    fn collects_from_triples() {
        let graph: DirectedGraph<&str> = [
            ("a", "b", [("distance", 1.0)]),
            ("b", "c", [("distance", 2.0)]),
        ]
        .into_iter()
        .collect();

        assert!(graph.exists_edge(&"a", &"b"));
        assert_eq!(graph.edge_weight(&"b", &"c", "distance"), Some(2.0));
    }

    #[test]
    fn extend_skips_non_finite_triples() {
        let mut graph = DirectedGraph::new();
        graph.add_edge("a", "b", [("distance", 1.0)]).unwrap();
        graph.extend([
            ("b", "c", [("distance", f64::NAN)]),
            ("c", "d", [("distance", 3.0)]),
        ]);

        assert_eq!(graph.edge_count(), 2);
        assert!(!graph.exists_edge(&"b", &"c"));
        assert!(graph.exists_edge(&"c", &"d"));
    }

    #[test]
    fn try_extend_stops_at_first_invalid_triple() {
        let mut graph = DirectedGraph::new();
        let err = graph
            .try_extend([
                ("a", "b", [("distance", 1.0)]),
                ("b", "c", [("distance", f64::INFINITY)]),
                ("c", "d", [("distance", 3.0)]),
            ])
            .unwrap_err();

        assert!(matches!(err, GraphError::InvalidWeight { .. }));
        assert!(graph.exists_edge(&"a", &"b"));
        assert!(!graph.exists_edge(&"c", &"d"));
        assert_eq!(graph.edge_count(), 1);
    }
}
