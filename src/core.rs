//! Basic building blocks: points, vertex identifiers, distance metrics and the
//! traits that algorithms use to look at a graph.

pub mod error;
pub mod id;
pub mod metric;
pub mod point;
pub mod weight;

pub use error::Error;
pub use id::VertexId;
pub use metric::{Euclidean, Haversine, Metric};
pub use point::Point;

/// Access to the vertex set of a graph.
pub trait VertexSet {
    /// Number of vertices. Vertex ids are `0..vertex_count()`.
    fn vertex_count(&self) -> usize;

    fn contains_vertex(&self, id: VertexId) -> bool {
        id.as_usize() < self.vertex_count()
    }

    fn vertex_ids(&self) -> VertexIds {
        VertexIds {
            range: 0..self.vertex_count(),
        }
    }
}

/// Access to the adjacency of a graph.
pub trait Neighbors: VertexSet {
    /// Neighbors of the vertex, or an empty slice if the vertex does not
    /// exist.
    fn neighbors(&self, from: VertexId) -> &[VertexId];
}

/// Weights of the edges of a graph.
///
/// The weights are not stored in the graph, they are derived from the vertices
/// on demand.
pub trait EdgeWeight {
    fn edge_weight(&self, from: VertexId, to: VertexId) -> f64;
}

impl<G: VertexSet> VertexSet for &G {
    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }
}

impl<G: Neighbors> Neighbors for &G {
    fn neighbors(&self, from: VertexId) -> &[VertexId] {
        (**self).neighbors(from)
    }
}

impl<G: EdgeWeight> EdgeWeight for &G {
    fn edge_weight(&self, from: VertexId, to: VertexId) -> f64 {
        (**self).edge_weight(from, to)
    }
}

/// Iterator over all vertex ids of a graph.
#[derive(Debug, Clone)]
pub struct VertexIds {
    range: std::ops::Range<usize>,
}

impl Iterator for VertexIds {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(VertexId::from_usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl ExactSizeIterator for VertexIds {}
