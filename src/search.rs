use super::*;

/// Nearest-centroid search result: centroid index and squared distance.
pub type Neighbor = (Group, Distance);

/// Finds the nearest centroid for a point in an O(K) scan.
///
/// A candidate wins only on strictly smaller distance, so equidistant
/// centroids never displace an earlier index or the point's incumbent
/// assignment. Equal-distance reassignment would let points thrash
/// between centroids and break reproducibility under a fixed seed.
/// Deliberately not `Iterator::min_by`, which keeps the LAST of equal
/// minima and would invert the tie-break.
pub fn nearest(point: &Point, centroids: &[Centroid], incumbent: Group) -> Neighbor {
    debug_assert!(!centroids.is_empty());
    let mut nearest = (incumbent, Distance::INFINITY);
    for (j, centroid) in centroids.iter().enumerate() {
        let distance = centroid.squared_distance(point);
        if distance < nearest.1 {
            nearest = (j, distance);
        }
    }
    nearest
}
