use crate::{
    core::{Neighbors, VertexId},
    visit::{Bfs, VisitSet, Visitor},
};

use super::Connected;

pub fn bfs<G>(graph: &G, between: Option<(VertexId, VertexId)>) -> Connected
where
    G: Neighbors,
{
    let disconnected_any = match between {
        Some((start, goal)) => bfs_between(graph, start, goal),
        None => bfs_all(graph),
    };

    Connected { disconnected_any }
}

fn bfs_between<G>(graph: &G, start: VertexId, goal: VertexId) -> Option<(VertexId, VertexId)>
where
    G: Neighbors,
{
    if !graph.contains_vertex(start) || !graph.contains_vertex(goal) {
        return Some((start, goal));
    }

    // The start is dequeued first, so a vertex is connected with itself
    // without special handling.
    let mut traversal = Bfs::new(graph);
    let reached = traversal
        .start(start)
        .iter(graph)
        .any(|vertex| vertex == goal);

    if reached {
        None
    } else {
        Some((start, goal))
    }
}

fn bfs_all<G>(graph: &G) -> Option<(VertexId, VertexId)>
where
    G: Neighbors,
{
    let mut vertices = graph.vertex_ids();
    let start = vertices.next()?;

    let mut traversal = Bfs::new(graph);
    traversal.start(start).iter(graph).for_each(drop);

    if traversal.visited().visited_count() == graph.vertex_count() {
        return None;
    }

    vertices
        .find(|vertex| !traversal.visited().is_visited(vertex))
        .map(|vertex| (start, vertex))
}
