//! Dijkstra shortest paths.

use tracing::debug;

use super::{best_first, Path, ZeroHeuristic};
use crate::error::Result;
use crate::graph::{DirectedGraph, GraphNode};

impl<N: GraphNode> DirectedGraph<N> {
    /// Length of the cheapest route from `source` to `target` under
    /// `attribute`.
    ///
    /// # Errors
    ///
    /// - [`UnknownAttribute`](crate::GraphError::UnknownAttribute) if no edge
    ///   uses `attribute`
    /// - [`NodeNotFound`](crate::GraphError::NodeNotFound) if `source` is not
    ///   in the graph
    /// - [`NoPath`](crate::GraphError::NoPath) if `target` is unreachable
    pub fn dijkstra_trip_length(&self, source: &N, target: &N, attribute: &str) -> Result<f64> {
        self.dijkstra_path(source, target, attribute)
            .map(|path| path.cost)
    }

    /// Cheapest route from `source` to `target` under `attribute`, with the
    /// nodes it visits.
    pub fn dijkstra_path(&self, source: &N, target: &N, attribute: &str) -> Result<Path<N>> {
        let path = best_first(self, source, target, attribute, &ZeroHeuristic)?;
        debug!(?source, ?target, attribute, cost = path.cost, hops = path.hops(), "dijkstra");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::GraphError;
    use crate::graph::DirectedGraph;

    fn triangle() -> DirectedGraph<&'static str> {
        let mut graph = DirectedGraph::new();
        graph.add_edge("u", "v", [("weight", 10.0)]).unwrap();
        graph.add_edge("v", "u", [("weight", 9.0)]).unwrap();
        graph.add_edge("v", "w", [("weight", 13.0)]).unwrap();
        graph
    }

    #[test]
    fn sums_weights_along_route() {
        let graph = triangle();
        assert_eq!(graph.dijkstra_trip_length(&"u", &"w", "weight").unwrap(), 23.0);

        let path = graph.dijkstra_path(&"u", &"w", "weight").unwrap();
        assert_eq!(path.nodes, vec!["u", "v", "w"]);
    }

    #[test]
    fn prefers_cheaper_detour() {
        let mut graph = DirectedGraph::new();
        graph.add_edge("a", "d", [("weight", 10.0)]).unwrap();
        graph.add_edge("a", "b", [("weight", 1.0)]).unwrap();
        graph.add_edge("b", "c", [("weight", 2.0)]).unwrap();
        graph.add_edge("c", "d", [("weight", 3.0)]).unwrap();

        let path = graph.dijkstra_path(&"a", &"d", "weight").unwrap();
        assert_eq!(path.cost, 6.0);
        assert_eq!(path.nodes, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn unknown_attribute_fails() {
        let graph = triangle();
        let err = graph.dijkstra_trip_length(&"u", &"w", "foo").unwrap_err();
        assert!(matches!(err, GraphError::UnknownAttribute(ref name) if name == "foo"));
    }

    #[test]
    fn unreachable_target_fails() {
        let mut graph = triangle();
        graph.add_edge("x", "y", [("weight", 1.0)]).unwrap();

        assert!(matches!(
            graph.dijkstra_trip_length(&"u", &"y", "weight"),
            Err(GraphError::NoPath { .. })
        ));
        assert!(matches!(
            graph.dijkstra_trip_length(&"w", &"u", "weight"),
            Err(GraphError::NoPath { .. })
        ));
    }

    #[test]
    fn unknown_source_fails() {
        let graph = triangle();
        assert!(matches!(
            graph.dijkstra_trip_length(&"ghost", &"u", "weight"),
            Err(GraphError::NodeNotFound(_))
        ));
    }

    #[test]
    fn trip_to_self_is_free() {
        let graph = triangle();
        assert_eq!(graph.dijkstra_trip_length(&"w", &"w", "weight").unwrap(), 0.0);
    }

    #[test]
    fn edges_without_attribute_cost_nothing() {
        let mut graph = DirectedGraph::new();
        graph.add_edge("a", "b", [("time", 5.0)]).unwrap();
        graph.add_edge("b", "c", [("distance", 7.0)]).unwrap();

        assert_eq!(graph.dijkstra_trip_length(&"a", &"c", "distance").unwrap(), 7.0);
        assert_eq!(graph.dijkstra_trip_length(&"a", &"c", "time").unwrap(), 5.0);
    }

    #[test]
    fn zero_cost_result_is_not_a_failure() {
        let mut graph = DirectedGraph::new();
        graph.add_edge("a", "b", [("toll", 0.0)]).unwrap();
        assert_eq!(graph.dijkstra_trip_length(&"a", &"b", "toll").unwrap(), 0.0);
    }
}
