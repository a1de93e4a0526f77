use spath_core::Vertex;

/// Counters describing the work a search performed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Vertices closed (finalized).
    pub expanded: usize,
    /// Queue entries discarded because a better entry for the same vertex was popped earlier.
    pub stale: usize,
    /// Decrease-key calls, including the initial push of the source.
    pub pushed: usize,
}

/// Outcome of a single-goal search.
///
/// An unreachable goal is a normal outcome: `cost` is infinite and `vertices` is empty.
#[derive(Clone, Debug, PartialEq)]
pub struct PathResult<V> {
    pub cost: f64,
    /// Vertices from source to goal, both included.
    pub vertices: Vec<V>,
    pub stats: SearchStats,
}

impl<V> PathResult<V> {
    pub fn unreachable(stats: SearchStats) -> Self {
        PathResult {
            cost: f64::INFINITY,
            vertices: vec![],
            stats,
        }
    }

    pub fn is_found(&self) -> bool {
        !self.vertices.is_empty()
    }
}

/// Walks predecessor links back from `goal` and returns the path in source-to-goal order.
///
/// Returns `None` if the chain ends anywhere other than `source` or loops.
pub fn reconstruct_path(
    predecessor: &[Option<Vertex>],
    source: Vertex,
    goal: Vertex,
) -> Option<Vec<Vertex>> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(parent) = predecessor[current.index()] {
        if path.len() > predecessor.len() {
            return None;
        }
        path.push(parent);
        current = parent;
    }
    if current != source {
        return None;
    }
    path.reverse();
    Some(path)
}
