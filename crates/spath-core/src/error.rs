/// Errors surfaced by graph construction and search.
///
/// `V` is the caller's vertex identifier type. "No path exists" is not an error: it is reported
/// as an unreachable search result instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error<V> {
    /// An edge weight was negative, NaN or infinite.
    #[error("invalid weight {weight} on edge {from:?} -> {to:?}")]
    InvalidWeight {
        /// Tail of the rejected edge.
        from: V,
        /// Head of the rejected edge.
        to: V,
        /// The rejected weight.
        weight: f64,
    },

    /// A vertex was referenced that was never added to the graph.
    #[error("unknown vertex {0:?}")]
    UnknownVertex(V),

    /// A position was required for a vertex that has none.
    #[error("vertex {0:?} has no position")]
    NoPosition(V),

    /// A position had a NaN or infinite coordinate.
    #[error("vertex {0:?} has a non-finite position")]
    InvalidPosition(V),

    /// A vertex that already has a position was given a different one.
    #[error("vertex {0:?} already has a different position")]
    PositionReassigned(V),

    /// Walking predecessors back from the goal did not reach the source.
    ///
    /// This indicates a bug in the search engine and is never expected in correct operation.
    #[error("predecessor chain from {goal:?} does not lead back to the source")]
    BrokenPredecessorChain {
        /// The vertex the reconstruction started from.
        goal: V,
    },
}

/// Checks that `weight` can be used as an edge weight.
#[inline]
pub fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight >= 0.0
}
