//! Dijkstra and A* search over [`spath_graph::Graph`].
//!
//! Both algorithms share one expansion loop in [`Searcher`]; the zero heuristic turns A* into
//! Dijkstra's algorithm.

mod heuristic;
mod path;
mod searcher;
mod tree;

use std::fmt::Debug;
use std::hash::Hash;

use spath_core::{Error, PriorityQueue};
use spath_graph::Graph;

pub use self::heuristic::*;
pub use self::path::*;
pub use self::searcher::*;
pub use self::tree::*;

/// Runs Dijkstra's algorithm from `source` until every reachable vertex is finalized.
pub fn shortest_paths_from_source<'g, V>(
    graph: &'g Graph<V>,
    source: &V,
) -> Result<ShortestPathTree<'g, V>, Error<V>>
where
    V: Clone + Eq + Hash + Debug,
{
    Searcher::<PriorityQueue>::new().shortest_paths_from_source(graph, source)
}

/// Runs A* from `source` to `goal`, stopping as soon as `goal` is finalized.
pub fn shortest_path<V, H>(
    graph: &Graph<V>,
    source: &V,
    goal: &V,
    heuristic: &H,
) -> Result<PathResult<V>, Error<V>>
where
    V: Clone + Eq + Hash + Debug,
    H: Heuristic<V>,
{
    Searcher::<PriorityQueue>::new().shortest_path(graph, source, goal, heuristic)
}
