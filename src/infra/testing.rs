use rustc_hash::FxHashSet;

use crate::{
    core::{EdgeWeight, Euclidean, Neighbors, Point, VertexId},
    graph::{GraphBuilder, RoadGraph},
    visit::VisitSet,
};

/// Three vertices on a line and one isolated vertex, in the plane.
///
/// ```text
/// a = (0, 0) -- b = (0, 1) -- c = (0, 2)        d = (10, 10)
/// ```
pub struct LineWithIsolated {
    pub graph: RoadGraph<Euclidean>,
    pub a: Point,
    pub b: Point,
    pub c: Point,
    pub d: Point,
}

pub fn line_with_isolated() -> LineWithIsolated {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(0.0, 1.0);
    let c = Point::new(0.0, 2.0);
    let d = Point::new(10.0, 10.0);

    let mut builder = GraphBuilder::new();
    let va = builder.add_vertex("A", a);
    let vb = builder.add_vertex("B", b);
    let vc = builder.add_vertex("C", c);
    builder.add_vertex("D", d);
    builder.extend_with_edges([(va, vb), (vb, vc)]);

    LineWithIsolated {
        graph: builder.build().expect("fixture edges are valid"),
        a,
        b,
        c,
        d,
    }
}

/// Length of the shortest path found by enumerating all simple paths.
/// Exponential, use only on tiny graphs.
pub fn brute_force_distance<G>(graph: &G, from: VertexId, to: VertexId) -> Option<f64>
where
    G: Neighbors + EdgeWeight,
{
    fn search<G>(
        graph: &G,
        vertex: VertexId,
        to: VertexId,
        dist: f64,
        on_path: &mut FxHashSet<VertexId>,
        best: &mut Option<f64>,
    ) where
        G: Neighbors + EdgeWeight,
    {
        if vertex == to {
            if best.map_or(true, |best| dist < best) {
                *best = Some(dist);
            }
            return;
        }

        for &next in graph.neighbors(vertex) {
            if on_path.visit(next) {
                let next_dist = dist + graph.edge_weight(vertex, next);
                search(graph, next, to, next_dist, on_path, best);
                on_path.remove(&next);
            }
        }
    }

    if !graph.contains_vertex(from) || !graph.contains_vertex(to) {
        return None;
    }

    let mut on_path = FxHashSet::default();
    on_path.visit(from);

    let mut best = None;
    search(graph, from, to, 0.0, &mut on_path, &mut best);
    best
}
