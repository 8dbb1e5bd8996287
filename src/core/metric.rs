//! Distance functions between points.
//!
//! A graph uses a single metric for everything: edge weights, nearest-point
//! search and route length. This keeps the units consistent.

use super::point::Point;

/// Mean earth radius in miles used by [`Haversine`].
pub const EARTH_RADIUS_MILES: f64 = 3956.0;

pub trait Metric {
    fn distance(&self, a: &Point, b: &Point) -> f64;
}

impl<F> Metric for F
where
    F: Fn(&Point, &Point) -> f64,
{
    fn distance(&self, a: &Point, b: &Point) -> f64 {
        (self)(a, b)
    }
}

/// Great-circle distance in miles, computed by the [haversine
/// formula](https://en.wikipedia.org/wiki/Haversine_formula).
///
/// `x` is the latitude and `y` the longitude of a point, both in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Haversine;

impl Metric for Haversine {
    fn distance(&self, a: &Point, b: &Point) -> f64 {
        let lat_a = a.x().to_radians();
        let lat_b = b.x().to_radians();
        let dlat = lat_b - lat_a;
        let dlon = (b.y() - a.y()).to_radians();

        let h = (dlat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (dlon / 2.0).sin().powi(2);

        // Rounding can push `h` slightly above one for antipodal points.
        2.0 * h.sqrt().min(1.0).asin() * EARTH_RADIUS_MILES
    }
}

/// Straight-line distance in the plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Metric for Euclidean {
    fn distance(&self, a: &Point, b: &Point) -> f64 {
        (a.x() - b.x()).hypot(a.y() - b.y())
    }
}

/// Sums the distances between consecutive points of the sequence.
///
/// Sequences with fewer than two points have zero length.
pub fn path_length<M: Metric + ?Sized>(metric: &M, points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|pair| metric.distance(&pair[0], &pair[1]))
        .sum()
}
