//! Road network graph over geographic points.
//!
//! The [`RoadGraph`] answers three kinds of queries: the vertex nearest to an
//! arbitrary point, whether two vertices are connected, and the shortest route
//! between two vertices together with its length. Edge weights are the
//! distances between the endpoints, in miles for the default [`Haversine`]
//! metric.
//!
//! Graphs are read from the `.graph` text format by the [`loader`] module or
//! assembled by hand with a [`GraphBuilder`].
//!
//! ```
//! use roadnet::{loader, Point};
//!
//! let input = "
//!     4 3
//!     raleigh 35.7796 -78.6382
//!     durham 35.9940 -78.8986
//!     chapel-hill 35.9132 -79.0558
//!     wilmington 34.2104 -77.8868
//!     0 1 I-40
//!     1 2 US-15
//!     0 2
//! ";
//!
//! let graph = loader::parse_graph(input)?.into_graph()?;
//!
//! let start = graph.nearest_point(Point::new(35.78, -78.64))?;
//! let end = graph.nearest_point(Point::new(35.91, -79.05))?;
//! let route = graph.route(start, end)?;
//!
//! assert_eq!(route.len(), 2);
//!
//! let wilmington = graph.nearest_point(Point::new(34.2, -77.9))?;
//! assert!(!graph.connected(start, wilmington)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod algo;
pub mod core;
pub mod graph;
pub mod infra;
pub mod loader;
pub mod visit;

pub use crate::core::{
    error::BuildError, Error, Euclidean, Haversine, Metric, Point, VertexId,
};
pub use graph::{EdgeRecord, GraphBuilder, RoadGraph, Route, VertexRecord};

pub mod prelude {
    pub use crate::{
        core::{EdgeWeight, Metric, Neighbors, VertexSet},
        visit::{VisitSet, Visitor},
    };
}
