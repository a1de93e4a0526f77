use std::fmt::Debug;
use std::hash::Hash;

use spath_core::traits::{OpenList, QueueEntry};
use spath_core::{Error, PriorityQueue, Vertex};
use spath_graph::Graph;
use tracing::{debug, trace};

use crate::{reconstruct_path, Heuristic, PathResult, SearchStats, ShortestPathTree};

/// Search engine shared by Dijkstra's algorithm and A*.
///
/// The open list is kept between searches to reuse its allocation; all other bookkeeping is
/// allocated fresh for every call. A `Searcher` runs one search at a time, so concurrent searches
/// over the same graph each need their own.
pub struct Searcher<Q = PriorityQueue> {
    open: Q,
}

/// Per-search bookkeeping, indexed by [`Vertex`].
struct SearchState {
    distance: Vec<f64>,
    predecessor: Vec<Option<Vertex>>,
    closed: Vec<bool>,
    // NaN until the heuristic has been evaluated for the vertex
    h: Vec<f64>,
}

impl SearchState {
    fn new(vertices: usize) -> Self {
        SearchState {
            distance: vec![f64::INFINITY; vertices],
            predecessor: vec![None; vertices],
            closed: vec![false; vertices],
            h: vec![f64::NAN; vertices],
        }
    }
}

impl<Q: OpenList + Default> Searcher<Q> {
    pub fn new() -> Self {
        Searcher { open: Q::default() }
    }
}

impl<Q: OpenList + Default> Default for Searcher<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: OpenList> Searcher<Q> {
    pub fn with_open_list(open: Q) -> Self {
        Searcher { open }
    }

    /// Dijkstra's algorithm: finalizes every vertex reachable from `source`.
    pub fn shortest_paths_from_source<'g, V>(
        &mut self,
        graph: &'g Graph<V>,
        source: &V,
    ) -> Result<ShortestPathTree<'g, V>, Error<V>>
    where
        V: Clone + Eq + Hash + Debug,
    {
        self.shortest_paths_from_source_observed(graph, source, |_, _| {})
    }

    /// Like [`Self::shortest_paths_from_source`], calling `on_close` with each vertex and its
    /// final distance as the vertex is finalized.
    pub fn shortest_paths_from_source_observed<'g, V>(
        &mut self,
        graph: &'g Graph<V>,
        source: &V,
        mut on_close: impl FnMut(Vertex, f64),
    ) -> Result<ShortestPathTree<'g, V>, Error<V>>
    where
        V: Clone + Eq + Hash + Debug,
    {
        let source_vertex = graph.vertex(source)?;
        debug!(source = ?source, vertices = graph.vertex_count(), "dijkstra started");

        let mut order = vec![];
        let (state, stats) = self.run(graph, source_vertex, None, |_| 0.0, |v, g| {
            order.push(v);
            on_close(v, g);
        });

        debug!(
            reachable = order.len(),
            expanded = stats.expanded,
            stale = stats.stale,
            "dijkstra finished"
        );

        Ok(ShortestPathTree {
            graph,
            source: source_vertex,
            distance: state.distance,
            predecessor: state.predecessor,
            order,
            stats,
        })
    }

    /// A*: finds a cheapest path from `source` to `goal` guided by `heuristic`.
    ///
    /// With [`ZeroHeuristic`](crate::ZeroHeuristic) this is Dijkstra's algorithm with early
    /// termination. The result is optimal whenever the heuristic is admissible.
    pub fn shortest_path<V, H>(
        &mut self,
        graph: &Graph<V>,
        source: &V,
        goal: &V,
        heuristic: &H,
    ) -> Result<PathResult<V>, Error<V>>
    where
        V: Clone + Eq + Hash + Debug,
        H: Heuristic<V>,
    {
        self.shortest_path_observed(graph, source, goal, heuristic, |_, _| {})
    }

    /// Like [`Self::shortest_path`], calling `on_close` with each vertex and its final distance
    /// as the vertex is finalized.
    pub fn shortest_path_observed<V, H>(
        &mut self,
        graph: &Graph<V>,
        source: &V,
        goal: &V,
        heuristic: &H,
        on_close: impl FnMut(Vertex, f64),
    ) -> Result<PathResult<V>, Error<V>>
    where
        V: Clone + Eq + Hash + Debug,
        H: Heuristic<V>,
    {
        let source_vertex = graph.vertex(source)?;
        let goal_vertex = graph.vertex(goal)?;
        heuristic.prepare(graph, source_vertex, goal_vertex)?;
        debug!(source = ?source, goal = ?goal, "a* started");

        let (state, stats) = self.run(
            graph,
            source_vertex,
            Some(goal_vertex),
            |v| heuristic.estimate(graph, v, goal_vertex),
            on_close,
        );

        if !state.closed[goal_vertex.index()] {
            debug!(expanded = stats.expanded, stale = stats.stale, "a* found no path");
            return Ok(PathResult::unreachable(stats));
        }

        let cost = state.distance[goal_vertex.index()];
        let path = reconstruct_path(&state.predecessor, source_vertex, goal_vertex)
            .ok_or_else(|| Error::BrokenPredecessorChain { goal: goal.clone() })?;
        debug!(
            cost,
            length = path.len(),
            expanded = stats.expanded,
            stale = stats.stale,
            "a* finished"
        );

        Ok(PathResult {
            cost,
            vertices: path.into_iter().map(|v| graph.id(v).clone()).collect(),
            stats,
        })
    }

    /// The shared expansion loop. Stops when `goal` is closed, or when the open list runs dry.
    fn run<V>(
        &mut self,
        graph: &Graph<V>,
        source: Vertex,
        goal: Option<Vertex>,
        mut heuristic: impl FnMut(Vertex) -> f64,
        mut on_close: impl FnMut(Vertex, f64),
    ) -> (SearchState, SearchStats) {
        let mut state = SearchState::new(graph.vertex_count());
        let mut stats = SearchStats::default();
        let open = &mut self.open;
        open.clear();

        let source_h = heuristic(source);
        state.distance[source.index()] = 0.0;
        state.h[source.index()] = source_h;
        open.push(source_h, source);
        stats.pushed += 1;

        while let Some(QueueEntry { priority, vertex }) = open.pop_min() {
            let index = vertex.index();
            if state.closed[index] || priority > state.distance[index] + state.h[index] {
                trace!(?vertex, priority, "discarded stale entry");
                stats.stale += 1;
                continue;
            }

            let vertex_g = state.distance[index];
            state.closed[index] = true;
            stats.expanded += 1;
            on_close(vertex, vertex_g);

            if goal == Some(vertex) {
                break;
            }

            for edge in graph.edges(vertex) {
                let successor = edge.target.index();
                if state.closed[successor] {
                    continue;
                }
                let new_g = vertex_g + edge.weight;
                if new_g < state.distance[successor] {
                    if state.h[successor].is_nan() {
                        state.h[successor] = heuristic(edge.target);
                    }
                    state.distance[successor] = new_g;
                    state.predecessor[successor] = Some(vertex);
                    open.decrease_key(edge.target, new_g + state.h[successor]);
                    stats.pushed += 1;
                }
            }
        }

        (state, stats)
    }
}
