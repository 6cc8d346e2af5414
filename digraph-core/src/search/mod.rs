//! Path Search
//!
//! Single-source weighted shortest-path queries over a [`DirectedGraph`].
//!
//! # Algorithm
//!
//! Both Dijkstra and A* run the same best-first loop:
//!
//! 1. Push the source with accumulated cost 0
//! 2. Pop the entry with the lowest priority (cost plus heuristic estimate);
//!    equal priorities pop in the order they were pushed
//! 3. Skip nodes already settled; otherwise settle the node
//! 4. Stop when the target is settled
//! 5. Relax every outgoing edge using the chosen attribute's weight
//!
//! Dijkstra is the loop with [`ZeroHeuristic`]. Edges lacking the chosen
//! attribute cost 0. Weights are assumed non-negative; negative weights are
//! accepted by the graph but may yield non-optimal costs.

mod astar;
mod dijkstra;

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use ordered_float::OrderedFloat;
use serde::Serialize;
use tracing::trace;

use crate::error::{GraphError, Result};
use crate::graph::{DirectedGraph, GraphNode};

/// Estimate of the remaining cost from a node to the search target.
///
/// A* returns optimal costs when the estimate never exceeds the true
/// remaining cost and never drops by more than an edge's weight along that
/// edge (a consistent heuristic).
pub trait Heuristic<N> {
    fn estimate(&self, node: &N, target: &N) -> f64;
}

/// The uninformative heuristic. Makes A* behave exactly like Dijkstra.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<N> Heuristic<N> for ZeroHeuristic {
    fn estimate(&self, _node: &N, _target: &N) -> f64 {
        0.0
    }
}

impl<N, F> Heuristic<N> for F
where
    F: Fn(&N, &N) -> f64,
{
    fn estimate(&self, node: &N, target: &N) -> f64 {
        self(node, target)
    }
}

/// A shortest path and its total cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path<N> {
    /// Nodes from source to target, both included.
    pub nodes: Vec<N>,

    /// Accumulated cost under the searched attribute.
    pub cost: f64,
}

impl<N> Path<N> {
    pub fn source(&self) -> Option<&N> {
        self.nodes.first()
    }

    pub fn target(&self) -> Option<&N> {
        self.nodes.last()
    }

    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Frontier entry. Ordered so that `BinaryHeap` pops the lowest priority
/// first, then the earliest push.
struct Entry<N> {
    priority: OrderedFloat<f64>,
    seq: u64,
    node: N,
}

impl<N> PartialEq for Entry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<N> Eq for Entry<N> {}

impl<N> PartialOrd for Entry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for Entry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority queue of nodes with insertion-order tie-breaking.
pub(crate) struct Frontier<N> {
    heap: BinaryHeap<Entry<N>>,
    next_seq: u64,
}

impl<N> Frontier<N> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub(crate) fn push(&mut self, priority: f64, node: N) {
        self.heap.push(Entry {
            priority: OrderedFloat(priority),
            seq: self.next_seq,
            node,
        });
        self.next_seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<N> {
        self.heap.pop().map(|entry| entry.node)
    }
}

/// Best-first search from `source` to `target` under `attribute`.
pub(crate) fn best_first<N, H>(
    graph: &DirectedGraph<N>,
    source: &N,
    target: &N,
    attribute: &str,
    heuristic: &H,
) -> Result<Path<N>>
where
    N: GraphNode,
    H: Heuristic<N> + ?Sized,
{
    graph.require_weight(attribute)?;
    if !graph.contains_node(source) {
        return Err(GraphError::node_not_found(source));
    }

    let mut costs: HashMap<N, f64> = HashMap::new();
    let mut parents: HashMap<N, N> = HashMap::new();
    let mut settled: HashSet<N> = HashSet::new();
    let mut frontier = Frontier::new();

    costs.insert(source.clone(), 0.0);
    frontier.push(heuristic.estimate(source, target), source.clone());

    while let Some(node) = frontier.pop() {
        if !settled.insert(node.clone()) {
            continue;
        }
        let Some(&cost) = costs.get(&node) else {
            continue;
        };
        trace!(?node, cost, "settled");

        if &node == target {
            return Ok(Path {
                nodes: walk_back(&parents, node),
                cost,
            });
        }

        for (next, attributes) in graph.successors(&node) {
            if settled.contains(next) {
                continue;
            }
            let candidate = cost + attributes.cost(attribute);
            if costs.get(next).map_or(true, |&known| candidate < known) {
                costs.insert(next.clone(), candidate);
                parents.insert(next.clone(), node.clone());
                frontier.push(candidate + heuristic.estimate(next, target), next.clone());
            }
        }
    }

    Err(GraphError::no_path(source, target))
}

/// Follow parent links from `target` back to the search source.
fn walk_back<N: GraphNode>(parents: &HashMap<N, N>, target: N) -> Vec<N> {
    let mut nodes = vec![target];
    while let Some(parent) = nodes.last().and_then(|node| parents.get(node)) {
        nodes.push(parent.clone());
    }
    nodes.reverse();
    nodes
}
