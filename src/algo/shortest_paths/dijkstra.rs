use std::{
    cmp::Reverse,
    collections::{hash_map::Entry, BinaryHeap, HashSet},
    hash::BuildHasherDefault,
};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    core::{
        weight::{OrderedFloat, Weighted},
        EdgeWeight, Neighbors, VertexId,
    },
    visit::VisitSet,
};

use super::{Error, Relaxation, ShortestPaths};

pub fn dijkstra<G>(
    graph: &G,
    source: VertexId,
    goal: Option<VertexId>,
    relaxation: Relaxation,
) -> Result<ShortestPaths, Error>
where
    G: Neighbors + EdgeWeight,
{
    if !graph.contains_vertex(source) {
        return Err(Error::SourceAbsent);
    }

    // A hash set rather than a bit set, a search with a goal usually settles
    // only a small neighborhood of the source.
    let mut visited: FxHashSet<_> = HashSet::with_capacity_and_hasher(
        graph.vertex_count().min(1024),
        BuildHasherDefault::default(),
    );

    let mut dist = FxHashMap::default();
    let mut pred = FxHashMap::default();
    let mut queue = BinaryHeap::new();

    dist.insert(source, 0.0);
    queue.push(Reverse(Weighted(source, OrderedFloat(0.0))));

    while let Some(Reverse(Weighted(vertex, vertex_dist))) = queue.pop() {
        let vertex_dist = f64::from(vertex_dist);

        // Stale entry left in the queue by an earlier relaxation.
        if visited.is_visited(&vertex) {
            continue;
        }

        if goal == Some(vertex) {
            // Settled, the check after the loop relies on it.
            visited.visit(vertex);
            break;
        }

        for &next in graph.neighbors(vertex) {
            if visited.is_visited(&next) {
                continue;
            }

            let next_dist = vertex_dist + graph.edge_weight(vertex, next);

            match dist.entry(next) {
                Entry::Occupied(curr_dist) => {
                    if relaxation == Relaxation::Full && next_dist < *curr_dist.get() {
                        *curr_dist.into_mut() = next_dist;
                        // No decrease-key in BinaryHeap, push a duplicate
                        // instead. The stale entry is skipped when popped.
                        queue.push(Reverse(Weighted(next, OrderedFloat(next_dist))));
                        pred.insert(next, vertex);
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(next_dist);
                    queue.push(Reverse(Weighted(next, OrderedFloat(next_dist))));
                    pred.insert(next, vertex);
                }
            }
        }

        visited.visit(vertex);
    }

    if let Some(goal) = goal {
        if !visited.is_visited(&goal) {
            return Err(Error::GoalNotReached);
        }
    }

    tracing::trace!(
        %source,
        settled = visited.len(),
        discovered = dist.len(),
        "shortest paths search finished"
    );

    Ok(ShortestPaths { source, dist, pred })
}
