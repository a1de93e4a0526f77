use spath_core::{Error, Position, Vertex};
use spath_graph::Graph;

/// Estimate of the remaining cost from a vertex to the goal.
///
/// The estimate must never exceed the true remaining cost (admissibility), otherwise the search
/// silently returns suboptimal paths. If it also satisfies `h(u) <= w(u, v) + h(v)` for every
/// edge (consistency), no vertex ever needs to be expanded twice.
pub trait Heuristic<V> {
    /// Called once before the search starts; rejects graphs the estimate cannot be evaluated on.
    fn prepare(&self, _graph: &Graph<V>, _source: Vertex, _goal: Vertex) -> Result<(), Error<V>> {
        Ok(())
    }

    fn estimate(&self, graph: &Graph<V>, vertex: Vertex, goal: Vertex) -> f64;
}

impl<V, F: Fn(Vertex, Vertex) -> f64> Heuristic<V> for F {
    fn estimate(&self, _graph: &Graph<V>, vertex: Vertex, goal: Vertex) -> f64 {
        self(vertex, goal)
    }
}

/// Constant zero; reduces A* to Dijkstra's algorithm.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl<V> Heuristic<V> for ZeroHeuristic {
    #[inline(always)]
    fn estimate(&self, _graph: &Graph<V>, _vertex: Vertex, _goal: Vertex) -> f64 {
        0.0
    }
}

/// Straight-line distance between positions, multiplied by `scale`.
#[derive(Clone, Copy, Debug)]
pub struct EuclideanHeuristic {
    scale: f64,
}

/// Sum of absolute coordinate differences, multiplied by `scale`.
///
/// Only admissible when no edge is shorter than the Manhattan distance between its endpoints,
/// e.g. on four-connected grids.
#[derive(Clone, Copy, Debug)]
pub struct ManhattanHeuristic {
    scale: f64,
}

impl EuclideanHeuristic {
    pub fn new() -> Self {
        Self::with_scale(1.0)
    }

    /// Use when edge weights are a multiple of geometric length; `scale` must not exceed the
    /// smallest weight-to-length ratio of any edge.
    pub fn with_scale(scale: f64) -> Self {
        EuclideanHeuristic { scale }
    }
}

impl ManhattanHeuristic {
    pub fn new() -> Self {
        Self::with_scale(1.0)
    }

    pub fn with_scale(scale: f64) -> Self {
        ManhattanHeuristic { scale }
    }
}

impl Default for EuclideanHeuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for ManhattanHeuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Heuristic<V> for EuclideanHeuristic {
    fn prepare(&self, graph: &Graph<V>, source: Vertex, goal: Vertex) -> Result<(), Error<V>> {
        require_positions(graph, source, goal)
    }

    #[inline(always)]
    fn estimate(&self, graph: &Graph<V>, vertex: Vertex, goal: Vertex) -> f64 {
        positional(graph, vertex, goal, |a, b| a.euclidean(b) * self.scale)
    }
}

impl<V: Clone> Heuristic<V> for ManhattanHeuristic {
    fn prepare(&self, graph: &Graph<V>, source: Vertex, goal: Vertex) -> Result<(), Error<V>> {
        require_positions(graph, source, goal)
    }

    #[inline(always)]
    fn estimate(&self, graph: &Graph<V>, vertex: Vertex, goal: Vertex) -> f64 {
        positional(graph, vertex, goal, |a, b| a.manhattan(b) * self.scale)
    }
}

#[inline(always)]
fn positional<V>(
    graph: &Graph<V>,
    vertex: Vertex,
    goal: Vertex,
    f: impl FnOnce(Position, Position) -> f64,
) -> f64 {
    match (graph.position_of(vertex), graph.position_of(goal)) {
        (Some(a), Some(b)) => f(a, b),
        // unreachable after `require_positions`; zero is still admissible
        _ => 0.0,
    }
}

/// Checks that `goal` and every vertex reachable from `source` has a position.
pub fn require_positions<V: Clone>(
    graph: &Graph<V>,
    source: Vertex,
    goal: Vertex,
) -> Result<(), Error<V>> {
    if graph.has_all_positions() {
        return Ok(());
    }
    if graph.position_of(goal).is_none() {
        return Err(Error::NoPosition(graph.id(goal).clone()));
    }

    let mut missing = None;
    graph.dfs(source, |vertex| {
        if missing.is_some() {
            return false;
        }
        if graph.position_of(vertex).is_none() {
            missing = Some(vertex);
            return false;
        }
        true
    });

    match missing {
        Some(vertex) => Err(Error::NoPosition(graph.id(vertex).clone())),
        None => Ok(()),
    }
}
