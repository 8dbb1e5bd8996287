//! The road network graph and its queries.
//!
//! # Examples
//!
//! ```
//! use roadnet::{core::Point, GraphBuilder};
//!
//! // Latitude and longitude, distances in miles.
//! let mut builder: GraphBuilder = GraphBuilder::new();
//!
//! let raleigh = builder.add_vertex("Raleigh", (35.7796, -78.6382));
//! let durham = builder.add_vertex("Durham", (35.9940, -78.8986));
//! let greensboro = builder.add_vertex("Greensboro", (36.0726, -79.7920));
//!
//! builder.add_named_edge(raleigh, durham, "I-40");
//! builder.add_named_edge(durham, greensboro, "I-85");
//!
//! let graph = builder.build().unwrap();
//!
//! let start = graph.nearest_point(Point::new(35.78, -78.64)).unwrap();
//! let end = graph.nearest_point(Point::new(36.07, -79.79)).unwrap();
//! let route = graph.route(start, end).unwrap();
//!
//! assert_eq!(route.len(), 3);
//! println!("{:.1} miles", graph.route_distance(&route));
//! ```

use std::ops::Index;

use rustc_hash::FxHashMap;

use crate::{
    algo::{
        nearest::nearest_vertex,
        shortest_paths::{self, Relaxation, ShortestPaths},
        Connected,
    },
    core::{
        error::BuildError,
        metric::{path_length, Haversine, Metric},
        point::PointKey,
        EdgeWeight, Error, Neighbors, Point, VertexId, VertexSet,
    },
};

mod builder;
mod route;

pub use builder::{EdgeRecord, GraphBuilder, VertexRecord};
pub use route::Route;

/// An undirected road network over geographic points.
///
/// Edge weights are the distances between their endpoints as measured by the
/// metric `M`. The graph is immutable once built, so it can be shared by
/// reference among threads and queried concurrently.
#[derive(Debug, Clone)]
pub struct RoadGraph<M = Haversine> {
    points: Vec<Point>,
    names: Vec<String>,
    adjacency: Vec<Box<[VertexId]>>,
    edge_names: FxHashMap<(VertexId, VertexId), String>,
    edge_count: usize,
    lookup: FxHashMap<PointKey, VertexId>,
    metric: M,
}

impl<M: Metric + Default> RoadGraph<M> {
    /// Builds the graph from vertex and edge records, typically produced by
    /// the [loader](crate::loader).
    pub fn from_records<V, E>(vertices: V, edges: E) -> Result<Self, BuildError>
    where
        V: IntoIterator<Item = VertexRecord>,
        E: IntoIterator<Item = EdgeRecord>,
    {
        Self::from_records_with(M::default(), vertices, edges)
    }
}

impl<M: Metric> RoadGraph<M> {
    pub fn from_records_with<V, E>(metric: M, vertices: V, edges: E) -> Result<Self, BuildError>
    where
        V: IntoIterator<Item = VertexRecord>,
        E: IntoIterator<Item = EdgeRecord>,
    {
        let mut builder = GraphBuilder::with_metric(metric);
        builder.extend_with_vertices(vertices);
        builder.extend_with_edges(edges);
        builder.build()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn point(&self, id: VertexId) -> Option<Point> {
        self.points.get(id.as_usize()).copied()
    }

    pub fn name(&self, id: VertexId) -> Option<&str> {
        self.names.get(id.as_usize()).map(String::as_str)
    }

    /// Name of the road between two adjacent vertices, if it has one.
    pub fn edge_name(&self, u: VertexId, v: VertexId) -> Option<&str> {
        self.edge_names
            .get(&builder::edge_key(u, v))
            .map(String::as_str)
    }

    /// Resolves a point to the vertex with exactly the same coordinates.
    pub fn vertex_of(&self, point: Point) -> Option<VertexId> {
        self.lookup.get(&point.key()?).copied()
    }

    fn resolve(&self, point: Point) -> Result<VertexId, Error> {
        self.vertex_of(point).ok_or(Error::PointNotInGraph)
    }

    /// Returns the vertex closest to the query point, which does not need to
    /// be a vertex itself. Ties go to the vertex with the lowest index.
    pub fn nearest_vertex(&self, query: Point) -> Result<VertexId, Error> {
        nearest_vertex(&self.points, &self.metric, &query).ok_or(Error::EmptyGraph)
    }

    /// Like [`nearest_vertex`](RoadGraph::nearest_vertex), but returns the
    /// point of the vertex.
    pub fn nearest_point(&self, query: Point) -> Result<Point, Error> {
        self.nearest_vertex(query)
            .map(|vertex| self.points[vertex.as_usize()])
    }

    /// Determines whether there is a path between the two vertices.
    pub fn connected(&self, p1: Point, p2: Point) -> Result<bool, Error> {
        let u = self.resolve(p1)?;
        let v = self.resolve(p2)?;

        Ok(Connected::on(self).between(u, v).run().is())
    }

    /// Returns the shortest route between the two vertices.
    ///
    /// The route between a vertex and itself is empty.
    pub fn route(&self, start: Point, end: Point) -> Result<Route, Error> {
        self.route_with(start, end, Relaxation::default())
    }

    /// Like [`route`](RoadGraph::route), but with explicit relaxation policy
    /// of the shortest path search.
    pub fn route_with(
        &self,
        start: Point,
        end: Point,
        relaxation: Relaxation,
    ) -> Result<Route, Error> {
        let source = self.resolve(start)?;
        let goal = self.resolve(end)?;

        if source == goal {
            return Ok(Route::empty());
        }

        let paths = ShortestPaths::on(self)
            .goal(goal)
            .relaxation(relaxation)
            .run(source)
            .map_err(|error| match error {
                shortest_paths::Error::GoalNotReached => Error::NoRouteFound,
                shortest_paths::Error::SourceAbsent => Error::PointNotInGraph,
            })?;

        let path = paths.path_to(goal).ok_or(Error::NoRouteFound)?;

        Ok(path
            .into_iter()
            .map(|vertex| self.points[vertex.as_usize()])
            .collect())
    }

    /// Total distance along the points of the route, which do not need to be
    /// vertices of the graph. Zero for routes with fewer than two points.
    pub fn route_distance(&self, route: &[Point]) -> f64 {
        path_length(&self.metric, route)
    }
}

impl<M> VertexSet for RoadGraph<M> {
    fn vertex_count(&self) -> usize {
        self.points.len()
    }
}

impl<M> Neighbors for RoadGraph<M> {
    fn neighbors(&self, from: VertexId) -> &[VertexId] {
        self.adjacency
            .get(from.as_usize())
            .map(|neighbors| &**neighbors)
            .unwrap_or(&[])
    }
}

impl<M: Metric> EdgeWeight for RoadGraph<M> {
    /// Infinite if either vertex does not exist.
    fn edge_weight(&self, from: VertexId, to: VertexId) -> f64 {
        match (self.point(from), self.point(to)) {
            (Some(from), Some(to)) => self.metric.distance(&from, &to),
            _ => f64::INFINITY,
        }
    }
}

impl<M> Index<VertexId> for RoadGraph<M> {
    type Output = Point;

    fn index(&self, index: VertexId) -> &Self::Output {
        &self.points[index.as_usize()]
    }
}
