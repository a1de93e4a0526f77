//! Traits shared between the open lists and the search engine.

use crate::Vertex;

/// An entry removed from an [`OpenList`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QueueEntry {
    /// Priority the vertex was queued with: `g` for Dijkstra, `g + h` for A*.
    pub priority: f64,
    /// The queued vertex.
    pub vertex: Vertex,
}

/// Min-ordered container of vertices used as the search frontier.
///
/// Entries with equal priority leave the list in the order they were inserted. Implementations
/// may hold several entries for the same vertex; telling the authoritative one apart from stale
/// ones is the consumer's job.
pub trait OpenList {
    /// Removes every entry and restarts the insertion counter.
    fn clear(&mut self);

    /// Inserts `vertex` with `priority`.
    fn push(&mut self, priority: f64, vertex: Vertex);

    /// Lowers the priority of `vertex`, inserting it if it is not queued.
    fn decrease_key(&mut self, vertex: Vertex, priority: f64);

    /// Removes and returns the entry with the smallest priority.
    fn pop_min(&mut self) -> Option<QueueEntry>;

    /// Number of entries, including stale ones.
    fn len(&self) -> usize;

    /// Whether any entries remain.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
