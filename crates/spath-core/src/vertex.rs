use std::fmt;

/// Dense handle for a vertex of a graph.
///
/// Handles are assigned in insertion order starting at zero, so they double as indices into
/// per-vertex tables. A handle is only meaningful for the graph that issued it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex(u32);

impl Vertex {
    /// Largest number of vertices a single graph can hold.
    pub const MAX_COUNT: usize = u32::MAX as usize;

    /// Creates the handle for the vertex stored at `index`.
    #[track_caller]
    #[inline(always)]
    pub fn from_index(index: usize) -> Self {
        assert!(index < Self::MAX_COUNT, "vertex index out of range");
        Vertex(index as u32)
    }

    /// Returns the index this handle refers to.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}
