#![allow(dead_code)]

use fastrand::Rng;
use petgraph::prelude::*;
use roadnet::{GraphBuilder, Haversine, Point, RoadGraph, VertexId};

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Generates edges of a random graph where every pair is present with
/// probability `p`, skipping over absent pairs geometrically instead of
/// rolling for each of them.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_bound,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n {
            Some((*v, *w))
        } else {
            None
        }
    }
}

/// Random road network in the continental United States. Consecutive
/// vertices are always joined, so the network is connected, and other pairs
/// are joined with probability `density`.
pub fn random_network(vertex_count: usize, density: f32, rng: &mut Rng) -> RoadGraph {
    let mut builder = GraphBuilder::with_capacity(vertex_count, vertex_count);

    for i in 0..vertex_count {
        let lat = 25.0 + rng.f64() * 24.0;
        let lon = -124.0 + rng.f64() * 57.0;
        builder.add_vertex(format!("v{i}"), (lat, lon));
    }

    for i in 1..vertex_count {
        builder.add_edge(VertexId::from_usize(i - 1), VertexId::from_usize(i));
    }

    // With zero density the geometric skip degenerates and yields every pair.
    if density > 0.0 {
        let mut edges = RandomEdges::new(vertex_count, density);

        while let Some((u, v)) = edges.next_edge(rng) {
            builder.add_edge(VertexId::from_usize(u), VertexId::from_usize(v));
        }
    }

    builder.build().expect("generated edges are in range")
}

/// The same network as a petgraph graph with precomputed weights.
pub fn petgraph_network(graph: &RoadGraph) -> UnGraph<Point, f64> {
    use roadnet::prelude::*;

    let mut result = UnGraph::with_capacity(graph.vertex_count(), graph.edge_count());

    for &point in graph.points() {
        result.add_node(point);
    }

    for u in graph.vertex_ids() {
        for &v in graph.neighbors(u) {
            if u < v {
                let weight = Haversine.distance(&graph[u], &graph[v]);
                result.add_edge(NodeIndex::new(u.as_usize()), NodeIndex::new(v.as_usize()), weight);
            }
        }
    }

    result
}
