use super::*;
use rand::Rng;
use rayon::prelude::*;

/// K-means++ seed selection.
///
/// The first centroid is a uniformly random point; each subsequent
/// centroid is drawn with probability proportional to squared distance
/// from the nearest already-chosen centroid. The weighted draw walks
/// the points in input order subtracting distances from a random cut
/// of their total, which samples by weight without a cumulative array.
///
/// Per-point distances are computed in parallel but collected in input
/// order and summed serially, so the selection sequence is
/// bit-reproducible for a fixed random source. O(N·K) overall.
pub fn seeds(points: &[Point], k: usize, rng: &mut impl Rng) -> Vec<Centroid> {
    debug_assert!(1 <= k && k <= points.len());
    log::info!("{:<32}{:<32}", "kmeans++ seeding", k);
    let mut centroids = Vec::with_capacity(k);
    centroids.push(Centroid::from(points[rng.random_range(0..points.len())]));
    while centroids.len() < k {
        let distances = points
            .par_iter()
            .map(|point| nearest(point, &centroids, 0).1)
            .collect::<Vec<Distance>>();
        let total = distances.iter().sum::<Distance>();
        let mut target = total * rng.random::<f64>();
        // rounding can leave the cut unspent after the last subtraction,
        // in which case the last point is the selection
        let chosen = distances
            .iter()
            .position(|distance| {
                target -= distance;
                target <= 0.
            })
            .unwrap_or(points.len() - 1);
        centroids.push(Centroid::from(points[chosen]));
    }
    centroids
}

/// Assigns every point to its nearest seed, completing initialization.
pub fn assign(points: &[Point], centroids: &[Centroid]) -> Vec<Group> {
    points
        .par_iter()
        .map(|point| nearest(point, centroids, 0).0)
        .collect()
}
