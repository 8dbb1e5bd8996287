//! Check whether vertices of a graph are connected by a path.
//!
//! # Examples
//!
//! ```
//! use roadnet::{algo::Connected, core::Euclidean, GraphBuilder};
//!
//! let mut builder = GraphBuilder::<Euclidean>::new();
//!
//! let a = builder.add_vertex("a", (0.0, 0.0));
//! let b = builder.add_vertex("b", (0.0, 1.0));
//! let c = builder.add_vertex("c", (5.0, 5.0));
//!
//! builder.add_edge(a, b);
//!
//! let graph = builder.build().unwrap();
//!
//! assert!(Connected::on(&graph).between(a, b).run().is());
//! assert!(!Connected::on(&graph).between(a, c).run().is());
//! assert!(!Connected::on(&graph).run().is());
//! ```

use crate::core::{Neighbors, VertexId};

mod bfs;
mod builder;

pub use builder::ConnectedBuilder;

/// Result of a connectivity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connected {
    disconnected_any: Option<(VertexId, VertexId)>,
}

impl Connected {
    pub fn is(&self) -> bool {
        self.disconnected_any.is_none()
    }

    /// A pair of vertices without a path between them, if there is any.
    pub fn disconnected_any(&self) -> Option<(VertexId, VertexId)> {
        self.disconnected_any
    }
}

pub fn is_connected<G>(graph: &G) -> bool
where
    G: Neighbors,
{
    Connected::on(graph).run().is()
}

pub fn is_path_between<G>(graph: &G, src: VertexId, dst: VertexId) -> bool
where
    G: Neighbors,
{
    Connected::on(graph).between(src, dst).run().is()
}
