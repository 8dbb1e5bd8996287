use thiserror::Error;

/// The error encountered during a query on a
/// [`RoadGraph`](crate::RoadGraph).
///
/// All variants are recoverable conditions caused by the query, never by an
/// inconsistent graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// The query point does not match any vertex of the graph by coordinates.
    #[error("point is not a vertex of the graph")]
    PointNotInGraph,

    /// The start and end vertices are in different connected components.
    #[error("no route found")]
    NoRouteFound,

    /// The graph has no vertices.
    #[error("graph is empty")]
    EmptyGraph,
}

/// The error encountered when building a graph from vertex and edge records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum BuildError {
    /// An edge references a vertex index outside of `0..vertex_count`.
    #[error("edge #{edge} references vertex {vertex}, but there are only {vertex_count} vertices")]
    EndpointOutOfRange {
        edge: usize,
        vertex: usize,
        vertex_count: usize,
    },
}
