//! Shared Graph Handle
//!
//! [`DirectedGraph`] does no locking of its own. When several threads need
//! the same graph, wrap it in a [`SharedGraph`]: any number of readers may
//! query it at once, and a writer gets exclusive access.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::graph::{DirectedGraph, GraphNode};

/// Cloneable, thread-safe handle to one graph.
#[derive(Debug)]
pub struct SharedGraph<N: GraphNode> {
    inner: Arc<RwLock<DirectedGraph<N>>>,
}

impl<N: GraphNode> SharedGraph<N> {
    pub fn new(graph: DirectedGraph<N>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// Lock for reading. Blocks while a writer holds the lock.
    pub fn read(&self) -> RwLockReadGuard<'_, DirectedGraph<N>> {
        self.inner.read()
    }

    /// Lock for writing. Blocks until every reader is gone.
    pub fn write(&self) -> RwLockWriteGuard<'_, DirectedGraph<N>> {
        self.inner.write()
    }

    /// Take the graph back if this is the last handle.
    pub fn try_unwrap(self) -> Result<DirectedGraph<N>, Self> {
        Arc::try_unwrap(self.inner)
            .map(|lock| lock.into_inner())
            .map_err(|inner| Self { inner })
    }
}

impl<N: GraphNode> Clone for SharedGraph<N> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<N: GraphNode> From<DirectedGraph<N>> for SharedGraph<N> {
    fn from(graph: DirectedGraph<N>) -> Self {
        Self::new(graph)
    }
}

impl<N: GraphNode> Default for SharedGraph<N> {
    fn default() -> Self {
        Self::new(DirectedGraph::new())
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn readers_share_the_graph() {
        let mut graph = DirectedGraph::new();
        graph.add_edge(1u32, 2u32, [("weight", 4.0)]).unwrap();
        graph.add_edge(2u32, 3u32, [("weight", 5.0)]).unwrap();
        let shared = SharedGraph::new(graph);

        thread::scope(|scope| {
            for _ in 0..4 {
                let handle = shared.clone();
                scope.spawn(move || {
                    let length = handle.read().dijkstra_trip_length(&1, &3, "weight").unwrap();
                    assert_eq!(length, 9.0);
                });
            }
        });
    }

    #[test]
    fn writes_are_visible_to_other_handles() {
        let shared: SharedGraph<&str> = SharedGraph::default();
        let writer = shared.clone();

        writer.write().add_edge("u", "v", [("weight", 1.0)]).unwrap();
        assert!(shared.read().exists_edge(&"u", &"v"));

        drop(writer);
        let graph = shared.try_unwrap().unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn try_unwrap_fails_while_shared() {
        let shared: SharedGraph<&str> = SharedGraph::default();
        let other = shared.clone();
        assert!(shared.try_unwrap().is_err());
        assert!(other.try_unwrap().is_ok());
    }
}
