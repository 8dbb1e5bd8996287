//! Find shortest paths from a single source vertex in a road network.
//!
//! Edge weights are distances between the endpoints of the edges, so they are
//! never negative and Dijkstra's algorithm applies.
//!
//! # Examples
//!
//! ```
//! use roadnet::{algo::ShortestPaths, core::Euclidean, GraphBuilder};
//!
//! let mut builder = GraphBuilder::<Euclidean>::new();
//!
//! let a = builder.add_vertex("a", (0.0, 0.0));
//! let b = builder.add_vertex("b", (3.0, 0.0));
//! let c = builder.add_vertex("c", (3.0, 4.0));
//!
//! builder.extend_with_edges([(a, b), (b, c), (a, c)]);
//!
//! let graph = builder.build().unwrap();
//!
//! let shortest_paths = ShortestPaths::on(&graph).goal(c).run(a).unwrap();
//!
//! assert_eq!(shortest_paths[c], 5.0);
//! assert_eq!(shortest_paths.path_to(c), Some(vec![a, c]));
//! ```

use std::ops::Index;

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::{core::VertexId, visit::VisitSet};

mod builder;
mod dijkstra;

pub use builder::ShortestPathsBuilder;

/// Shortest paths and their distances from a single source vertex.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct ShortestPaths {
    source: VertexId,
    // Using hash maps because the search terminates early when the goal is
    // reached, which usually means visiting only a small part of the graph.
    dist: FxHashMap<VertexId, f64>,
    pred: FxHashMap<VertexId, VertexId>,
}

impl ShortestPaths {
    /// Source vertex where the search was started.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Returns the path distance between the source vertex and the given
    /// vertex, or `None` if it's not known.
    ///
    /// There are two causes why the distance between two vertices is not known:
    /// (1) the vertices are not connected, or (2) the
    /// [goal](ShortestPathsBuilder::goal) was reached before visiting the given
    /// vertex.
    pub fn dist(&self, to: VertexId) -> Option<f64> {
        self.dist.get(&to).copied()
    }

    /// Returns an iterator over predecessors of the given vertex on the path
    /// back to the source vertex, in this order.
    ///
    /// The iterator is empty if the vertex is the source or if the path is not
    /// known.
    pub fn reconstruct(&self, to: VertexId) -> PathReconstruction<'_> {
        PathReconstruction {
            curr: to,
            pred: &self.pred,
        }
    }

    /// Returns the vertices on the path from the source to the given vertex,
    /// both inclusive, or `None` if the path is not known.
    ///
    /// The backward walk over predecessors stops when it would visit a vertex
    /// for the second time. In that case, the part of the path collected so
    /// far is returned.
    pub fn path_to(&self, to: VertexId) -> Option<Vec<VertexId>> {
        if !self.dist.contains_key(&to) {
            return None;
        }

        let mut path = Vec::new();
        let mut seen: FxHashSet<VertexId> = FxHashSet::default();
        let mut curr = to;

        while curr != self.source {
            if !seen.visit(curr) {
                tracing::warn!(
                    source = %self.source,
                    target = %to,
                    vertex = %curr,
                    "cycle in predecessors, returning partial path"
                );
                path.reverse();
                return Some(path);
            }

            path.push(curr);

            match self.pred.get(&curr) {
                Some(&pred) => curr = pred,
                None => {
                    tracing::warn!(
                        source = %self.source,
                        target = %to,
                        vertex = %curr,
                        "missing predecessor, returning partial path"
                    );
                    path.reverse();
                    return Some(path);
                }
            }
        }

        path.push(self.source);
        path.reverse();
        Some(path)
    }
}

impl Index<VertexId> for ShortestPaths {
    type Output = f64;

    fn index(&self, index: VertexId) -> &Self::Output {
        &self.dist[&index]
    }
}

/// Policy for updating tentative distances of the frontier vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Relaxation {
    /// Textbook relaxation. Whenever a shorter path to a discovered but not
    /// yet settled vertex is found, its distance and predecessor are updated.
    /// Always finds the optimal path.
    #[default]
    Full,

    /// The distance and predecessor of a vertex are assigned only once, when
    /// the vertex is discovered for the first time. Cheaper, but the path may
    /// be longer than optimal if the vertex is first reached over a long edge
    /// from a vertex settled early.
    FirstDiscovery,
}

/// The error encountered during a [`ShortestPaths`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The source vertex is not in the graph.
    #[error("source vertex does not exist")]
    SourceAbsent,

    /// The specified goal not reached.
    #[error("specified goal not reached")]
    GoalNotReached,
}

/// Iterator over the vertices on the path from a vertex to the source vertex.
///
/// Returned by [`ShortestPaths::reconstruct`].
pub struct PathReconstruction<'a> {
    curr: VertexId,
    pred: &'a FxHashMap<VertexId, VertexId>,
}

impl<'a> Iterator for PathReconstruction<'a> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr = self.pred.get(&self.curr).copied()?;
        Some(self.curr)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::{
        core::{Euclidean, VertexSet},
        graph::GraphBuilder,
        infra::{proptest::road_graph, testing::brute_force_distance},
        RoadGraph,
    };

    use super::*;

    fn v(index: usize) -> VertexId {
        index.into()
    }

    // Coordinates are chosen so that the distances are whole numbers.
    fn create_basic_graph() -> RoadGraph<Euclidean> {
        let mut builder = GraphBuilder::new();

        let v0 = builder.add_vertex("v0", (0.0, 0.0));
        let v1 = builder.add_vertex("v1", (3.0, 4.0));
        let v2 = builder.add_vertex("v2", (6.0, 0.0));
        let v3 = builder.add_vertex("v3", (6.0, 8.0));
        let v4 = builder.add_vertex("v4", (12.0, 0.0));
        let v5 = builder.add_vertex("v5", (12.0, 10.0));

        builder.extend_with_edges([
            (v0, v1), // 5
            (v0, v2), // 6
            (v1, v3), // 5
            (v2, v4), // 6
            (v3, v4), // 10
            (v3, v5), // 6.32
            (v4, v5), // 10
        ]);

        builder.build().unwrap()
    }

    fn create_graph_with_isolated_vertex() -> (RoadGraph<Euclidean>, VertexId) {
        let mut builder = GraphBuilder::new();

        let v0 = builder.add_vertex("v0", (0.0, 0.0));
        let v1 = builder.add_vertex("v1", (1.0, 0.0));
        let v2 = builder.add_vertex("v2", (0.0, 1.0));
        let v3 = builder.add_vertex("v3", (9.0, 9.0));

        builder.extend_with_edges([(v0, v1), (v0, v2), (v1, v2)]);

        (builder.build().unwrap(), v3)
    }

    // The goal v4 is reached through v3. v3 is discovered first from v1, which
    // is settled before v2, but the path through v2 is shorter.
    fn create_graph_first_discovery_suboptimal() -> RoadGraph<Euclidean> {
        let mut builder = GraphBuilder::new();

        let v0 = builder.add_vertex("v0", (0.0, 0.0));
        let v1 = builder.add_vertex("v1", (1.0, 0.0));
        let v2 = builder.add_vertex("v2", (0.0, 1.1));
        let v3 = builder.add_vertex("v3", (0.0, 5.0));
        let v4 = builder.add_vertex("v4", (0.0, 10.0));

        builder.extend_with_edges([(v0, v1), (v0, v2), (v1, v3), (v2, v3), (v3, v4)]);

        builder.build().unwrap()
    }

    #[test]
    fn dijkstra_basic() {
        let graph = create_basic_graph();
        let shortest_paths = ShortestPaths::on(&graph).run(v(0)).unwrap();

        assert_eq!(shortest_paths.dist(v(4)), Some(12.0));
        assert_eq!(
            shortest_paths.reconstruct(v(4)).collect::<Vec<_>>(),
            vec![v(2), v(0)]
        );
        assert_eq!(shortest_paths.path_to(v(4)), Some(vec![v(0), v(2), v(4)]));

        assert_eq!(shortest_paths.dist(v(3)), Some(10.0));
        assert_eq!(shortest_paths[v(0)], 0.0);
        assert_eq!(shortest_paths.path_to(v(0)), Some(vec![v(0)]));
        assert_eq!(shortest_paths.source(), v(0));
    }

    #[test]
    fn dijkstra_early_termination() {
        let graph = create_basic_graph();
        let shortest_paths = ShortestPaths::on(&graph).goal(v(2)).run(v(0)).unwrap();

        assert_eq!(shortest_paths.dist(v(2)), Some(6.0));
        assert!(shortest_paths.dist(v(5)).is_none());
        assert_eq!(shortest_paths.path_to(v(5)), None);
    }

    #[test]
    fn dijkstra_goal_not_reached() {
        let (graph, u) = create_graph_with_isolated_vertex();

        let shortest_paths = ShortestPaths::on(&graph).goal(u).run(v(0));
        assert_matches!(shortest_paths, Err(Error::GoalNotReached));

        let shortest_paths = ShortestPaths::on(&graph).goal(v(1)).run(u);
        assert_matches!(shortest_paths, Err(Error::GoalNotReached));
    }

    #[test]
    fn dijkstra_source_absent() {
        let graph = create_basic_graph();

        assert_matches!(
            ShortestPaths::on(&graph).run(v(42)),
            Err(Error::SourceAbsent)
        );
    }

    #[test]
    fn dijkstra_goal_is_source() {
        let graph = create_basic_graph();
        let shortest_paths = ShortestPaths::on(&graph).goal(v(3)).run(v(3)).unwrap();

        assert_eq!(shortest_paths.dist(v(3)), Some(0.0));
        assert_eq!(shortest_paths.reconstruct(v(3)).count(), 0);
    }

    #[test]
    fn full_relaxation_optimal() {
        let graph = create_graph_first_discovery_suboptimal();
        let shortest_paths = ShortestPaths::on(&graph)
            .goal(v(4))
            .relaxation(Relaxation::Full)
            .run(v(0))
            .unwrap();

        assert_eq!(
            shortest_paths.path_to(v(4)),
            Some(vec![v(0), v(2), v(3), v(4)])
        );
        assert!((shortest_paths[v(4)] - 10.0).abs() < 1e-9);
    }

    #[test]
    fn first_discovery_keeps_first_distance() {
        let graph = create_graph_first_discovery_suboptimal();
        let shortest_paths = ShortestPaths::on(&graph)
            .goal(v(4))
            .relaxation(Relaxation::FirstDiscovery)
            .run(v(0))
            .unwrap();

        assert_eq!(
            shortest_paths.path_to(v(4)),
            Some(vec![v(0), v(1), v(3), v(4)])
        );
        assert!((shortest_paths[v(4)] - (6.0 + 26f64.sqrt())).abs() < 1e-9);
    }

    #[test]
    fn relaxation_policies_agree_on_simple_paths() {
        let graph = create_basic_graph();

        for goal in graph.vertex_ids() {
            let full = ShortestPaths::on(&graph)
                .goal(goal)
                .relaxation(Relaxation::Full)
                .run(v(0))
                .unwrap();
            let first = ShortestPaths::on(&graph)
                .goal(goal)
                .relaxation(Relaxation::FirstDiscovery)
                .run(v(0))
                .unwrap();

            assert_eq!(full.path_to(goal), first.path_to(goal));
        }
    }

    #[test]
    fn reconstruction_guards_against_cycles() {
        let mut pred = FxHashMap::default();
        pred.insert(v(3), v(2));
        pred.insert(v(2), v(1));
        pred.insert(v(1), v(2));

        let mut dist = FxHashMap::default();
        dist.insert(v(0), 0.0);
        dist.insert(v(3), 1.0);

        let shortest_paths = ShortestPaths {
            source: v(0),
            dist,
            pred,
        };

        assert_eq!(shortest_paths.path_to(v(3)), Some(vec![v(1), v(2), v(3)]));
    }

    #[test]
    fn reconstruction_missing_predecessor() {
        let mut dist = FxHashMap::default();
        dist.insert(v(0), 0.0);
        dist.insert(v(2), 1.0);

        let mut pred = FxHashMap::default();
        pred.insert(v(2), v(1));

        let shortest_paths = ShortestPaths {
            source: v(0),
            dist,
            pred,
        };

        assert_eq!(shortest_paths.path_to(v(2)), Some(vec![v(1), v(2)]));
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_dijkstra_matches_brute_force(graph in road_graph(9), source: u64, goal: u64) {
            let n = graph.vertex_count() as u64;
            prop_assume!(n > 0);

            let source = VertexId::from_usize((source % n) as usize);
            let goal = VertexId::from_usize((goal % n) as usize);

            let expected = brute_force_distance(&graph, source, goal);
            let actual = ShortestPaths::on(&graph).goal(goal).run(source).ok().map(|paths| paths[goal]);

            match (expected, actual) {
                (Some(expected), Some(actual)) => prop_assert!((expected - actual).abs() < 1e-9),
                (expected, actual) => prop_assert_eq!(expected, actual),
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_route_endpoints(graph in road_graph(32), source: u64, goal: u64) {
            let n = graph.vertex_count() as u64;
            prop_assume!(n > 0);

            let start = graph[VertexId::from_usize((source % n) as usize)];
            let end = graph[VertexId::from_usize((goal % n) as usize)];

            match graph.route(start, end) {
                Ok(route) if start == end => prop_assert!(route.is_empty()),
                Ok(route) => {
                    prop_assert_eq!(route.start(), Some(start));
                    prop_assert_eq!(route.end(), Some(end));
                    prop_assert_eq!(graph.connected(start, end), Ok(true));
                }
                Err(error) => {
                    prop_assert_eq!(error, crate::Error::NoRouteFound);
                    prop_assert_eq!(graph.connected(start, end), Ok(false));
                }
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_first_discovery_never_shorter(graph in road_graph(32), source: u64, goal: u64) {
            let n = graph.vertex_count() as u64;
            prop_assume!(n > 0);

            let start = graph[VertexId::from_usize((source % n) as usize)];
            let end = graph[VertexId::from_usize((goal % n) as usize)];

            let full = graph.route_with(start, end, Relaxation::Full);
            let first = graph.route_with(start, end, Relaxation::FirstDiscovery);

            match (full, first) {
                (Ok(full), Ok(first)) => {
                    prop_assert!(graph.route_distance(&full) <= graph.route_distance(&first) + 1e-9);
                }
                (full, first) => prop_assert_eq!(full.err(), first.err()),
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_route_to_itself_empty(graph in road_graph(32)) {
            for &point in graph.points() {
                prop_assert_eq!(graph.route(point, point).map(|route| route.len()), Ok(0));
            }
        }
    }
}
