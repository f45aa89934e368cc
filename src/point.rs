use super::*;

/// A 2-D point in the data set.
///
/// Coordinates never change during a run. Which cluster the point
/// belongs to lives in the engine's assignment vector, not here, so
/// seeding and assembly cannot disagree about point identity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    x: Coordinate,
    y: Coordinate,
}

impl Point {
    pub fn x(&self) -> Coordinate {
        self.x
    }
    pub fn y(&self) -> Coordinate {
        self.y
    }
    /// Squared Euclidean distance to another point.
    ///
    /// Strictly monotonic with true distance, so every argmin
    /// comparison works without the square root.
    pub fn squared_distance(&self, other: &Self) -> Distance {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Arbitrary for Point {
    /// Uniform radius and angle on a disk of radius 10 around the origin.
    fn random() -> Self {
        let radius = 10. * rand::random::<f64>();
        let angle = 2. * std::f64::consts::PI * rand::random::<f64>();
        Self {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }
}
