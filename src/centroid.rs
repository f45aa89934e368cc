use super::*;

/// Representative position for one cluster.
///
/// Centroids are indexed 0..K and the index IS the group identity:
/// `centroids[i]` is always the representative for `group == i`.
/// Construction copies a point's coordinates rather than aliasing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid(Point);

impl Centroid {
    pub fn x(&self) -> Coordinate {
        self.0.x()
    }
    pub fn y(&self) -> Coordinate {
        self.0.y()
    }
    /// Squared Euclidean distance from this centroid to a point.
    pub fn squared_distance(&self, point: &Point) -> Distance {
        self.0.squared_distance(point)
    }
}

impl From<Point> for Centroid {
    fn from(point: Point) -> Self {
        Self(point)
    }
}

impl std::fmt::Display for Centroid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// Transient running sum for the averaging phase of a relaxation round.
///
/// Kept separate from [`Centroid`] so steady-state coordinates and
/// in-flight sums never share a representation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Accumulator {
    x: f64,
    y: f64,
    n: usize,
}

impl Accumulator {
    /// Folds a point's coordinates into the running sum.
    pub fn absorb(&mut self, point: &Point) {
        self.x += point.x();
        self.y += point.y();
        self.n += 1;
    }
    /// Arithmetic mean of the absorbed points, or `None` when nothing
    /// was absorbed. The caller decides what an empty cell means; this
    /// type never divides by zero.
    pub fn mean(&self) -> Option<Centroid> {
        match self.n {
            0 => None,
            n => Some(Centroid::from(Point::from((
                self.x / n as f64,
                self.y / n as f64,
            )))),
        }
    }
    /// How many points have been absorbed.
    pub fn n(&self) -> usize {
        self.n
    }
}
