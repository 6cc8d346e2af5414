//! A* shortest paths.
//!
//! Without a heuristic A* degrades to Dijkstra and returns the same trip
//! lengths. A caller-supplied [`Heuristic`] narrows the search when it can
//! estimate the remaining cost, e.g. straight-line distance between
//! coordinates.

use tracing::debug;

use super::{best_first, Heuristic, Path, ZeroHeuristic};
use crate::error::Result;
use crate::graph::{DirectedGraph, GraphNode};

impl<N: GraphNode> DirectedGraph<N> {
    /// A* trip length with the zero heuristic.
    ///
    /// Fails exactly like [`dijkstra_trip_length`](Self::dijkstra_trip_length).
    pub fn astar_trip_length(&self, source: &N, target: &N, attribute: &str) -> Result<f64> {
        self.astar_trip_length_with(source, target, attribute, &ZeroHeuristic)
    }

    /// A* trip length guided by `heuristic`.
    pub fn astar_trip_length_with<H>(
        &self,
        source: &N,
        target: &N,
        attribute: &str,
        heuristic: &H,
    ) -> Result<f64>
    where
        H: Heuristic<N> + ?Sized,
    {
        self.astar_path(source, target, attribute, heuristic)
            .map(|path| path.cost)
    }

    /// A* route guided by `heuristic`, with the nodes it visits.
    pub fn astar_path<H>(
        &self,
        source: &N,
        target: &N,
        attribute: &str,
        heuristic: &H,
    ) -> Result<Path<N>>
    where
        H: Heuristic<N> + ?Sized,
    {
        let path = best_first(self, source, target, attribute, heuristic)?;
        debug!(?source, ?target, attribute, cost = path.cost, hops = path.hops(), "astar");
        Ok(path)
    }
}
