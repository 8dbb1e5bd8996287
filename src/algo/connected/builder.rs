use crate::core::{Neighbors, VertexId};

use super::{bfs::bfs, Connected};

/// Builder for [`Connected`].
pub struct ConnectedBuilder<'a, G> {
    graph: &'a G,
    between: Option<(VertexId, VertexId)>,
}

impl Connected {
    /// Starts the connectivity check on the graph. By default, the whole
    /// graph is checked.
    pub fn on<G>(graph: &G) -> ConnectedBuilder<'_, G> {
        ConnectedBuilder {
            graph,
            between: None,
        }
    }
}

impl<'a, G> ConnectedBuilder<'a, G> {
    /// Narrows the connectivity check to only these two vertices.
    pub fn between(self, from: VertexId, to: VertexId) -> Self {
        Self {
            between: Some((from, to)),
            ..self
        }
    }

    pub fn run(self) -> Connected
    where
        G: Neighbors,
    {
        bfs(self.graph, self.between)
    }
}
