use std::ops::Deref;

use crate::core::{
    metric::{path_length, Metric},
    point::Point,
};

/// An ordered sequence of points from a start to an end vertex, both
/// inclusive.
///
/// A route from a vertex to itself is empty, not a single point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Route {
    points: Vec<Point>,
}

impl Route {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn end(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Length of the route measured by the given metric.
    pub fn distance<M: Metric>(&self, metric: &M) -> f64 {
        path_length(metric, &self.points)
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl Deref for Route {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl From<Vec<Point>> for Route {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for Route {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Route {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::Euclidean;

    use super::*;

    #[test]
    fn endpoints_and_distance() {
        let route = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(3.0, 0.0),
        ]
        .into_iter()
        .collect::<Route>();

        assert_eq!(route.start(), Some(Point::new(0.0, 0.0)));
        assert_eq!(route.end(), Some(Point::new(3.0, 0.0)));
        assert_eq!(route.distance(&Euclidean), 9.0);
        assert_eq!(route.len(), 3);
    }

    #[test]
    fn empty() {
        let route = Route::empty();

        assert!(route.is_empty());
        assert_eq!(route.start(), None);
        assert_eq!(route.distance(&Euclidean), 0.0);
        assert!(route.into_points().is_empty());
    }
}
