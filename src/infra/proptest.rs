use proptest::{
    collection::{btree_set, vec},
    prelude::*,
};

use crate::{
    core::{Euclidean, Point},
    graph::{EdgeRecord, RoadGraph, VertexRecord},
};

/// Strategy for planar road graphs with at most `max_vertices` vertices.
///
/// Vertices lie on integer coordinates and no two of them coincide. Edges are
/// random pairs, so the graph is often disconnected, and may contain
/// duplicates and self-loops which the builder discards.
pub fn road_graph(max_vertices: usize) -> impl Strategy<Value = RoadGraph<Euclidean>> {
    btree_set((0i16..100, 0i16..100), 0..=max_vertices)
        .prop_flat_map(|coords| {
            let vertices = coords
                .into_iter()
                .enumerate()
                .map(|(index, (x, y))| {
                    VertexRecord::new(format!("v{index}"), Point::new(x.into(), y.into()))
                })
                .collect::<Vec<_>>();

            let n = vertices.len();
            let edges = if n > 0 {
                vec((0..n, 0..n), 0..=2 * n)
                    .prop_map(|pairs| pairs.into_iter().map(EdgeRecord::from).collect::<Vec<_>>())
                    .boxed()
            } else {
                Just(Vec::<EdgeRecord>::new()).boxed()
            };

            (Just(vertices), edges)
        })
        .prop_map(|(vertices, edges)| {
            RoadGraph::<Euclidean>::from_records(vertices, edges).expect("generated edges are in range")
        })
}
