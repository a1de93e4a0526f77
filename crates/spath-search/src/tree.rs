use std::fmt::Debug;
use std::hash::Hash;

use spath_core::{Error, Vertex};
use spath_graph::Graph;

use crate::{reconstruct_path, PathResult, SearchStats};

/// Distances and predecessors from a single source to every reachable vertex.
pub struct ShortestPathTree<'g, V> {
    pub(crate) graph: &'g Graph<V>,
    pub(crate) source: Vertex,
    pub(crate) distance: Vec<f64>,
    pub(crate) predecessor: Vec<Option<Vertex>>,
    pub(crate) order: Vec<Vertex>,
    pub(crate) stats: SearchStats,
}

impl<'g, V: Clone + Eq + Hash + Debug> ShortestPathTree<'g, V> {
    pub fn source(&self) -> &'g V {
        self.graph.id(self.source)
    }

    /// Shortest distance to `id`; infinite if it is unreachable.
    pub fn distance(&self, id: &V) -> Result<f64, Error<V>> {
        Ok(self.distance[self.graph.vertex(id)?.index()])
    }

    /// Previous vertex on the shortest path to `id`; `None` for the source and unreachable
    /// vertices.
    pub fn predecessor(&self, id: &V) -> Result<Option<&'g V>, Error<V>> {
        let vertex = self.graph.vertex(id)?;
        Ok(self.predecessor[vertex.index()].map(|p| self.graph.id(p)))
    }

    /// Distance and predecessor of `id`, if it is reachable.
    pub fn get(&self, id: &V) -> Option<(f64, Option<&'g V>)> {
        let vertex = self.graph.vertex(id).ok()?;
        let distance = self.distance[vertex.index()];
        if distance == f64::INFINITY {
            return None;
        }
        Some((distance, self.predecessor[vertex.index()].map(|p| self.graph.id(p))))
    }

    /// Shortest path from the source to `id`.
    pub fn path_to(&self, id: &V) -> Result<PathResult<V>, Error<V>> {
        let goal = self.graph.vertex(id)?;
        let cost = self.distance[goal.index()];
        if cost == f64::INFINITY {
            return Ok(PathResult::unreachable(self.stats));
        }
        let path = reconstruct_path(&self.predecessor, self.source, goal)
            .ok_or_else(|| Error::BrokenPredecessorChain { goal: id.clone() })?;
        Ok(PathResult {
            cost,
            vertices: path.into_iter().map(|v| self.graph.id(v).clone()).collect(),
            stats: self.stats,
        })
    }
}

impl<'g, V> ShortestPathTree<'g, V> {
    /// `(vertex, distance, predecessor)` for every reachable vertex, in closing order.
    pub fn iter(&self) -> impl Iterator<Item = (&'g V, f64, Option<&'g V>)> + '_ {
        let graph = self.graph;
        self.order.iter().map(move |&v| {
            (
                graph.id(v),
                self.distance[v.index()],
                self.predecessor[v.index()].map(|p| graph.id(p)),
            )
        })
    }

    /// Reachable vertices in the order they were finalized.
    pub fn closing_order(&self) -> &[Vertex] {
        &self.order
    }

    /// Number of reachable vertices, the source included.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}
