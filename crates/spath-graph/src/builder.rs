use std::fmt::Debug;
use std::hash::Hash;

use spath_core::{Error, Position};

use crate::Graph;

/// Incremental [`Graph`] construction with a fixed edge direction mode.
///
/// Undirected graphs are not a separate type: an undirected builder simply inserts both arcs
/// for every edge.
pub struct GraphBuilder<V> {
    graph: Graph<V>,
    directed: bool,
}

impl<V: Clone + Eq + Hash + Debug> GraphBuilder<V> {
    pub fn directed() -> Self {
        GraphBuilder {
            graph: Graph::new(),
            directed: true,
        }
    }

    pub fn undirected() -> Self {
        GraphBuilder {
            graph: Graph::new(),
            directed: false,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn vertex(&mut self, id: V, position: Option<Position>) -> Result<&mut Self, Error<V>> {
        self.graph.add_vertex(id, position)?;
        Ok(self)
    }

    pub fn edge(&mut self, from: V, to: V, weight: f64) -> Result<&mut Self, Error<V>> {
        if self.directed {
            self.graph.add_edge(from, to, weight)?;
        } else {
            self.graph.add_undirected_edge(from, to, weight)?;
        }
        Ok(self)
    }

    pub fn build(self) -> Graph<V> {
        self.graph
    }
}

impl<V: Clone + Eq + Hash + Debug> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::directed()
    }
}
