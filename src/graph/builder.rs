use rustc_hash::FxHashMap;

use crate::core::{
    error::BuildError,
    metric::{Haversine, Metric},
    point::Point,
    VertexId,
};

use super::RoadGraph;

/// A vertex as it comes from the input: a name and coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexRecord {
    pub name: String,
    pub point: Point,
}

impl VertexRecord {
    pub fn new(name: impl Into<String>, point: impl Into<Point>) -> Self {
        Self {
            name: name.into(),
            point: point.into(),
        }
    }
}

/// An undirected edge as it comes from the input: indices of the endpoints
/// into the vertex list and an optional road name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeRecord {
    pub from: usize,
    pub to: usize,
    pub name: Option<String>,
}

impl EdgeRecord {
    pub fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            name: None,
        }
    }

    pub fn named(from: usize, to: usize, name: impl Into<String>) -> Self {
        Self {
            from,
            to,
            name: Some(name.into()),
        }
    }
}

/// Collects vertices and edges and turns them into an immutable
/// [`RoadGraph`].
///
/// The graph is not observable until [`build`](GraphBuilder::build) returns,
/// and it cannot be changed afterwards.
#[derive(Debug, Clone)]
pub struct GraphBuilder<M = Haversine> {
    vertices: Vec<VertexRecord>,
    edges: Vec<EdgeRecord>,
    metric: M,
}

impl<M: Default> GraphBuilder<M> {
    pub fn new() -> Self {
        Self::with_metric(M::default())
    }

    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        let mut builder = Self::new();
        builder.reserve(vertex_capacity, edge_capacity);
        builder
    }
}

impl<M: Default> Default for GraphBuilder<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> GraphBuilder<M> {
    pub fn with_metric(metric: M) -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            metric,
        }
    }

    pub fn reserve(&mut self, additional_vertices: usize, additional_edges: usize) {
        self.vertices.reserve(additional_vertices);
        self.edges.reserve(additional_edges);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn add_vertex(&mut self, name: impl Into<String>, point: impl Into<Point>) -> VertexId {
        self.add_vertex_record(VertexRecord::new(name, point))
    }

    pub fn add_vertex_record(&mut self, record: VertexRecord) -> VertexId {
        let id = VertexId::from_usize(self.vertices.len());
        self.vertices.push(record);
        id
    }

    /// Adds an undirected edge. Endpoints are validated in
    /// [`build`](GraphBuilder::build).
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) {
        self.edges
            .push(EdgeRecord::new(from.as_usize(), to.as_usize()));
    }

    pub fn add_named_edge(&mut self, from: VertexId, to: VertexId, name: impl Into<String>) {
        self.edges
            .push(EdgeRecord::named(from.as_usize(), to.as_usize(), name));
    }

    pub fn add_edge_record(&mut self, record: EdgeRecord) {
        self.edges.push(record);
    }

    pub fn extend_with_vertices<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = VertexRecord>,
    {
        self.vertices.extend(vertices);
    }

    pub fn extend_with_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator,
        I::Item: Into<EdgeRecord>,
    {
        self.edges.extend(edges.into_iter().map(Into::into));
    }

    /// Builds the graph.
    ///
    /// Duplicate edges are merged and self-loops are dropped. If several
    /// vertices have identical coordinates, a point resolves to the one with
    /// the lowest index.
    pub fn build(self) -> Result<RoadGraph<M>, BuildError>
    where
        M: Metric,
    {
        let vertex_count = self.vertices.len();
        let mut adjacency = vec![Vec::new(); vertex_count];
        let mut edge_names = FxHashMap::default();

        for (ordinal, edge) in self.edges.into_iter().enumerate() {
            for vertex in [edge.from, edge.to] {
                if vertex >= vertex_count {
                    return Err(BuildError::EndpointOutOfRange {
                        edge: ordinal,
                        vertex,
                        vertex_count,
                    });
                }
            }

            if edge.from == edge.to {
                tracing::trace!(vertex = edge.from, "dropping self-loop");
                continue;
            }

            let from = VertexId::from_usize(edge.from);
            let to = VertexId::from_usize(edge.to);

            adjacency[edge.from].push(to);
            adjacency[edge.to].push(from);

            if let Some(name) = edge.name {
                edge_names.entry(edge_key(from, to)).or_insert(name);
            }
        }

        let adjacency = adjacency
            .into_iter()
            .map(|mut neighbors| {
                neighbors.sort_unstable();
                neighbors.dedup();
                neighbors.into_boxed_slice()
            })
            .collect::<Vec<_>>();

        let edge_count = adjacency.iter().map(|n| n.len()).sum::<usize>() / 2;

        let mut lookup = FxHashMap::default();
        lookup.reserve(vertex_count);

        let mut points = Vec::with_capacity(vertex_count);
        let mut names = Vec::with_capacity(vertex_count);

        for (index, VertexRecord { name, point }) in self.vertices.into_iter().enumerate() {
            if let Some(key) = point.key() {
                lookup.entry(key).or_insert_with(|| VertexId::from_usize(index));
            }
            points.push(point);
            names.push(name);
        }

        tracing::debug!(
            vertices = vertex_count,
            edges = edge_count,
            "road graph built"
        );

        Ok(RoadGraph {
            points,
            names,
            adjacency,
            edge_names,
            edge_count,
            lookup,
            metric: self.metric,
        })
    }
}

impl From<(usize, usize)> for EdgeRecord {
    fn from((from, to): (usize, usize)) -> Self {
        Self::new(from, to)
    }
}

impl From<(VertexId, VertexId)> for EdgeRecord {
    fn from((from, to): (VertexId, VertexId)) -> Self {
        Self::new(from.as_usize(), to.as_usize())
    }
}

pub(super) fn edge_key(u: VertexId, v: VertexId) -> (VertexId, VertexId) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}
