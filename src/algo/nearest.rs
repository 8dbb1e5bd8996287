//! Nearest vertex to an arbitrary point.

use crate::core::{Metric, Point, VertexId};

/// Finds the point closest to the query by a linear scan.
///
/// The current best is replaced only by a strictly closer point, so ties are
/// resolved in favor of the lowest index. Returns `None` if there are no
/// points.
pub fn nearest_vertex<M>(points: &[Point], metric: &M, query: &Point) -> Option<VertexId>
where
    M: Metric + ?Sized,
{
    let mut iter = points.iter().enumerate();
    let (first, point) = iter.next()?;

    let mut best = first;
    let mut best_dist = metric.distance(query, point);

    for (index, point) in iter {
        let dist = metric.distance(query, point);
        if dist < best_dist {
            best = index;
            best_dist = dist;
        }
    }

    Some(VertexId::from_usize(best))
}
