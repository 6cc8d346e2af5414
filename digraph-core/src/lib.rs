//! Digraph Core
//!
//! This crate provides a directed graph whose edges carry named numeric
//! weights, and the queries that run over it:
//!
//! - Edge mutation with incrementally maintained node and attribute sets
//! - Shortest paths under a chosen attribute (Dijkstra and A*)
//! - Budgeted subset expansion from a single source
//! - Disjoint partitioning of the nodes reachable from several seeds
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `graph`: Edge storage, attribute table and the `DirectedGraph` itself
//! - `search`: Dijkstra and A* path search
//! - `subset`: Budgets, subset expansion and partitioning
//! - `tabular`: CSV edge-list loading
//! - `shared`: Read/write handle for sharing a graph across threads
//!
//! The library logs through `tracing` and never installs a subscriber.
//!
//! # Example
//!
//! ```rust
//! use digraph_core::{Budget, DirectedGraph};
//!
//! let mut graph = DirectedGraph::new();
//! graph.add_edge("u", "v", [("weight", 10.0)])?;
//! graph.add_edge("v", "u", [("weight", 9.0)])?;
//! graph.add_edge("v", "w", [("weight", 13.0)])?;
//! graph.add_edge("v", "a", [("weight", 10.0)])?;
//! graph.add_edge("v", "z", [("weight", 7.0)])?;
//!
//! assert_eq!(graph.dijkstra_trip_length(&"u", &"w", "weight")?, 23.0);
//!
//! let partition = graph.disjoint_subsets(["v", "u"], &Budget::single("weight", 13.0), "weight")?;
//! assert_eq!(partition[&"v"].len(), 4);
//! assert_eq!(partition[&"u"].len(), 1);
//! # Ok::<(), digraph_core::GraphError>(())
//! ```

pub mod error;
pub mod graph;
pub mod search;
pub mod shared;
pub mod subset;
pub mod tabular;

pub use error::{GraphError, Result};
pub use graph::{DirectedGraph, EdgeAttributes, GraphNode, KeySet};
pub use search::{Heuristic, Path, ZeroHeuristic};
pub use shared::SharedGraph;
pub use subset::{Budget, ClaimPolicy, Costs, Partition, Subset};
pub use tabular::TabularConfig;
