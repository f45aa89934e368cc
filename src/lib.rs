//! K-means++ clustering for 2-D point sets.
//!
//! Groups a set of points into K clusters by choosing initial centroids
//! with the k-means++ heuristic, then relaxing them with Lloyd's
//! algorithm until assignments stabilize.
//!
//! ## Core Types
//!
//! - [`Point`] — A 2-D coordinate in the data set
//! - [`Centroid`] — Representative position for one cluster
//! - [`Cluster`] — Output group pairing a centroid with its members
//!
//! ## Algorithms
//!
//! - [`seeds`] — K-means++ initialization via distance-weighted sampling
//! - [`Lloyd`] — Fixed-point relaxation alternating averaging and reassignment
//! - [`nearest`] — Stable nearest-centroid search
//!
//! ## Entry Points
//!
//! [`KMeansPP::clusters`] takes raw coordinate pairs;
//! [`KMeansPP::clusters_by`] takes arbitrary records plus a projection
//! to coordinates and returns the original records grouped. The
//! `_with` variants accept a caller-owned random source so runs are
//! reproducible under a fixed seed.
mod centroid;
mod cluster;
mod error;
mod kmeans;
mod lloyd;
mod point;
mod search;
mod seeding;

pub use centroid::*;
pub use cluster::*;
pub use error::*;
pub use kmeans::*;
pub use lloyd::*;
pub use point::*;
pub use search::*;
pub use seeding::*;

/// X or Y position of a point or centroid.
pub type Coordinate = f64;
/// Squared Euclidean distances and their running sums.
pub type Distance = f64;
/// Index of a centroid, doubling as cluster identity.
pub type Group = usize;

/// Right shift applied to N to derive the convergence threshold.
/// A relaxation round that moves at most `n >> CONVERGENCE_SHIFT`
/// points (~0.1% of N) counts as converged. Below 1024 points the
/// threshold is 0, so only an exact fixed point stops the loop.
pub const CONVERGENCE_SHIFT: u32 = 10;
/// Upper bound on relaxation rounds. Lloyd's algorithm reaches a fixed
/// point long before this on ordinary inputs; the cap exists so a
/// pathological oscillation cannot loop forever.
pub const RELAXATION_CAP: usize = 0x10000;

/// Random instance generation for testing and benchmarks.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}
