use super::*;
use rand::Rng;
use rayon::prelude::*;

/// Lloyd relaxation engine.
///
/// Owns the points, their current assignment, and the centroid list for
/// the duration of a run. Groups and centroids share an index space,
/// and every group is a valid centroid index from seeding onward.
///
/// Each round recomputes centroids as the mean of their assigned points
/// and reassigns points to their nearest centroid. Reassignment is
/// parallelized across points (reads a fixed centroid snapshot, one
/// writer per point); accumulation stays a serial reduction.
pub struct Lloyd {
    points: Vec<Point>,
    groups: Vec<Group>,
    centroids: Vec<Centroid>,
}

impl Lloyd {
    /// Seeds K centroids with k-means++ and assigns every point to its
    /// nearest seed.
    pub fn seed(points: Vec<Point>, k: usize, rng: &mut impl Rng) -> Self {
        let centroids = seeds(&points, k, rng);
        let groups = assign(&points, &centroids);
        Self {
            points,
            groups,
            centroids,
        }
    }

    /// Iterates {average, reassign} until at most `n >> CONVERGENCE_SHIFT`
    /// points change cluster in a round.
    ///
    /// [`RELAXATION_CAP`] bounds the loop; if it is ever hit the current
    /// assignment is returned as-is with a warning.
    pub fn relax(mut self) -> Self {
        let threshold = self.points.len() >> CONVERGENCE_SHIFT;
        for round in 0..RELAXATION_CAP {
            self.average();
            let changed = self.reassign();
            log::debug!("{:3} {:>8}", round, changed);
            if changed <= threshold {
                log::info!("{:<32}{:<32}", "kmeans converged", round);
                return self;
            }
        }
        log::warn!("relaxation cap reached before convergence");
        self
    }

    /// One averaging pass: fold every point into its group's
    /// accumulator, then move each centroid to its cell's mean.
    /// A centroid whose cell is empty keeps its previous position.
    fn average(&mut self) {
        let mut sums = vec![Accumulator::default(); self.centroids.len()];
        for (point, group) in self.points.iter().zip(self.groups.iter()) {
            sums[*group].absorb(point);
        }
        for (centroid, sum) in self.centroids.iter_mut().zip(sums.iter()) {
            *centroid = sum.mean().unwrap_or(*centroid);
        }
    }

    /// Reassigns each point to its nearest centroid against this
    /// round's snapshot. Returns how many points changed group.
    fn reassign(&mut self) -> usize {
        let groups = self
            .points
            .par_iter()
            .zip(self.groups.par_iter())
            .map(|(point, group)| nearest(point, &self.centroids, *group).0)
            .collect::<Vec<Group>>();
        let changed = groups
            .iter()
            .zip(self.groups.iter())
            .filter(|(new, old)| new != old)
            .count();
        self.groups = groups;
        changed
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }
    pub fn centroids(&self) -> &[Centroid] {
        &self.centroids
    }
}
