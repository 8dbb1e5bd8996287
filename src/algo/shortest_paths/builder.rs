use crate::core::{EdgeWeight, Neighbors, VertexId};

use super::{dijkstra::dijkstra, Error, Relaxation, ShortestPaths};

/// Builder for [`ShortestPaths`].
pub struct ShortestPathsBuilder<'a, G> {
    graph: &'a G,
    goal: Option<VertexId>,
    relaxation: Relaxation,
}

impl ShortestPaths {
    /// Starts the search on the graph. See [`ShortestPathsBuilder`] for
    /// available parameters.
    pub fn on<G>(graph: &G) -> ShortestPathsBuilder<'_, G> {
        ShortestPathsBuilder {
            graph,
            goal: None,
            relaxation: Relaxation::default(),
        }
    }
}

impl<'a, G> ShortestPathsBuilder<'a, G> {
    /// Stops the search as soon as the shortest path to the goal is known.
    ///
    /// If the goal is not reached, the run fails with
    /// [`GoalNotReached`](Error::GoalNotReached).
    pub fn goal(self, goal: VertexId) -> Self {
        Self {
            goal: Some(goal),
            ..self
        }
    }

    pub fn relaxation(self, relaxation: Relaxation) -> Self {
        Self { relaxation, ..self }
    }

    pub fn run(self, source: VertexId) -> Result<ShortestPaths, Error>
    where
        G: Neighbors + EdgeWeight,
    {
        dijkstra(self.graph, source, self.goal, self.relaxation)
    }
}
