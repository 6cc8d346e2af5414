//! Directed Graph
//!
//! This module implements the graph structure every query runs against.
//!
//! # Overview
//!
//! The graph is a directed graph where:
//!
//! - Nodes are opaque identifiers; they exist as edge endpoints or as
//!   explicit placeholders
//! - Edges are ordered pairs carrying named numeric weights
//!
//! At most one edge exists per ordered pair. Adding the same pair again
//! merges the new attributes into the existing ones.
//!
//! # Design Decisions
//!
//! 1. Edges are split in two stores:
//!    - `EdgeIndex` holds adjacency and node bookkeeping
//!    - `AttributeTable` holds per-edge weights, keyed by `EdgeId`
//!
//! 2. `source_nodes`, `target_nodes` and `weights` are reference counted,
//!    so removing an edge never rescans the remaining ones.
//!
//! 3. Adjacency keeps insertion order. Searches break cost ties by the order
//!    nodes entered the frontier, so results are reproducible.

mod attributes;
mod counts;
mod directed;
mod edges;

pub use attributes::{AttributeTable, EdgeAttributes};
pub use counts::KeySet;
pub use directed::{DirectedGraph, GraphNode};
pub use edges::{EdgeId, EdgeIndex};
