use std::fmt;

/// An immutable pair of coordinates.
///
/// With the default [`Haversine`](super::Haversine) metric, `x` is the latitude and `y` the
/// longitude, both in degrees. With [`Euclidean`](super::Euclidean), they
/// are plain planar coordinates.
///
/// Two points are equal if both of their coordinates are equal exactly. There
/// is no tolerance, `0.0` and `-0.0` are equal and a `NaN` coordinate is never
/// equal to anything.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub(crate) fn key(&self) -> Option<PointKey> {
        PointKey::of(self)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Hashable form of a point that agrees with its `PartialEq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct PointKey(u64, u64);

impl PointKey {
    /// Returns `None` for points with a `NaN` coordinate, because such points
    /// are not equal even to themselves.
    fn of(point: &Point) -> Option<Self> {
        if point.x.is_nan() || point.y.is_nan() {
            return None;
        }

        Some(Self(normalize(point.x), normalize(point.y)))
    }
}

fn normalize(value: f64) -> u64 {
    // Both zeros compare equal, so they must hash equal.
    if value == 0.0 {
        0f64.to_bits()
    } else {
        value.to_bits()
    }
}
