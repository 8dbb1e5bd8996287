//! Identification of vertices in a graph.

use std::fmt;

/// An integer handle of a vertex in a graph.
///
/// Valid ids of a graph with `n` vertices are `0..n`, in the order in which
/// the vertices were added. This is the only addressing scheme of the graph;
/// points are resolved to ids through
/// [`RoadGraph::vertex_of`](crate::RoadGraph::vertex_of).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VertexId(u32);

impl VertexId {
    /// Converts an `usize` into the corresponding id.
    ///
    /// # Panics
    ///
    /// Panics if the index does not fit into the backing integer.
    pub fn from_usize(index: usize) -> Self {
        match u32::try_from(index) {
            Ok(bits) => Self(bits),
            Err(_) => panic!("vertex index {index} out of range"),
        }
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self::from_usize(index)
    }
}

impl From<VertexId> for usize {
    fn from(id: VertexId) -> Self {
        id.as_usize()
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
