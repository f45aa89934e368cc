use super::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Entry points for clustering.
///
/// Mirrors the two shapes callers hold data in: raw coordinate pairs,
/// or arbitrary records plus a function projecting each record to its
/// coordinates. In the record form the output clusters carry the
/// ORIGINAL records, not the projected coordinates.
///
/// The `_with` variants take a caller-owned random source; the plain
/// variants seed one from the OS. Given the same input, k, and random
/// source state, two runs produce identical clusters.
pub struct KMeansPP;

impl KMeansPP {
    /// Clusters coordinate pairs into k groups.
    pub fn clusters(
        points: &[(f64, f64)],
        k: usize,
    ) -> Result<Vec<Cluster<(f64, f64)>>, ClusterError> {
        let ref mut rng = SmallRng::from_os_rng();
        Self::clusters_with(points, k, rng)
    }

    /// Clusters coordinate pairs with a caller-supplied random source.
    pub fn clusters_with(
        points: &[(f64, f64)],
        k: usize,
        rng: &mut impl Rng,
    ) -> Result<Vec<Cluster<(f64, f64)>>, ClusterError> {
        Self::clusters_by_with(points.to_vec(), k, |point| *point, rng)
    }

    /// Clusters arbitrary records via a coordinate projection.
    pub fn clusters_by<T>(
        records: Vec<T>,
        k: usize,
        project: impl Fn(&T) -> (f64, f64),
    ) -> Result<Vec<Cluster<T>>, ClusterError> {
        let ref mut rng = SmallRng::from_os_rng();
        Self::clusters_by_with(records, k, project, rng)
    }

    /// Clusters arbitrary records with a caller-supplied random source.
    ///
    /// Validates 1 ≤ k ≤ N, seeds with k-means++, relaxes to a fixed
    /// point, and partitions the records by final assignment.
    pub fn clusters_by_with<T>(
        records: Vec<T>,
        k: usize,
        project: impl Fn(&T) -> (f64, f64),
        rng: &mut impl Rng,
    ) -> Result<Vec<Cluster<T>>, ClusterError> {
        match (records.len(), k) {
            (0, _) => Err(ClusterError::NoPoints),
            (_, 0) => Err(ClusterError::NoClusters),
            (n, k) if k > n => Err(ClusterError::TooManyClusters { k, n }),
            _ => {
                let points = records
                    .iter()
                    .map(|record| Point::from(project(record)))
                    .collect::<Vec<Point>>();
                let lloyd = Lloyd::seed(points, k, rng).relax();
                let groups = lloyd.groups().to_vec();
                let centroids = lloyd.centroids().to_vec();
                Ok(Cluster::assemble(records, &groups, &centroids))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;

    #[test]
    fn rejects_empty_input() {
        let points: Vec<(f64, f64)> = vec![];
        assert_eq!(
            KMeansPP::clusters_with(&points, 1, &mut rng(0)).unwrap_err(),
            ClusterError::NoPoints
        );
    }

    #[test]
    fn rejects_zero_clusters() {
        assert_eq!(
            KMeansPP::clusters_with(&[(0., 0.)], 0, &mut rng(0)).unwrap_err(),
            ClusterError::NoClusters
        );
    }

    #[test]
    fn rejects_more_clusters_than_points() {
        assert_eq!(
            KMeansPP::clusters_with(&[(0., 0.), (1., 1.)], 3, &mut rng(0)).unwrap_err(),
            ClusterError::TooManyClusters { k: 3, n: 2 }
        );
    }

    #[test]
    fn returns_k_clusters_partitioning_the_input() {
        let points = pairs(300, (0., 0.), 10., &mut rng(5));
        let clusters = KMeansPP::clusters_with(&points, 7, &mut rng(6)).expect("valid input");
        assert_eq!(clusters.len(), 7);
        let mut members = clusters
            .into_iter()
            .flat_map(Cluster::into_points)
            .collect::<Vec<(f64, f64)>>();
        let mut inputs = points.clone();
        members.sort_by(|a, b| a.partial_cmp(b).expect("finite coordinates"));
        inputs.sort_by(|a, b| a.partial_cmp(b).expect("finite coordinates"));
        assert_eq!(members, inputs);
    }

    #[test]
    fn identical_seeds_produce_identical_clusters() {
        let points = pairs(256, (3., 3.), 8., &mut rng(9));
        let a = KMeansPP::clusters_with(&points, 4, &mut rng(99)).expect("valid input");
        let b = KMeansPP::clusters_with(&points, 4, &mut rng(99)).expect("valid input");
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.centroid(), y.centroid());
            assert_eq!(x.points(), y.points());
        }
    }

    #[test]
    fn well_separated_pairs_converge_to_the_obvious_optimum() {
        let points = [(0., 0.), (0., 1.), (10., 10.), (10., 11.)];
        for seed in 0..32 {
            let mut clusters =
                KMeansPP::clusters_with(&points, 2, &mut rng(seed)).expect("valid input");
            clusters.sort_by(|a, b| {
                a.centroid()
                    .x()
                    .partial_cmp(&b.centroid().x())
                    .expect("finite coordinates")
            });
            assert_eq!(clusters[0].centroid(), &Centroid::from(Point::from((0., 0.5))));
            assert_eq!(
                clusters[1].centroid(),
                &Centroid::from(Point::from((10., 10.5)))
            );
            assert_eq!(clusters[0].points(), &[(0., 0.), (0., 1.)]);
            assert_eq!(clusters[1].points(), &[(10., 10.), (10., 11.)]);
        }
    }

    #[test]
    fn one_cluster_per_point_when_n_equals_k() {
        let points = [(0., 0.), (5., 0.), (0., 5.), (5., 5.)];
        let clusters = KMeansPP::clusters_with(&points, 4, &mut rng(17)).expect("valid input");
        assert_eq!(clusters.len(), 4);
        for cluster in clusters {
            assert_eq!(cluster.points().len(), 1);
            let (x, y) = cluster.points()[0];
            assert_eq!(cluster.centroid().x(), x);
            assert_eq!(cluster.centroid().y(), y);
        }
    }

    #[test]
    fn projected_records_come_back_intact() {
        #[derive(Debug, Clone, PartialEq)]
        struct Record {
            id: u32,
            x: f64,
            y: f64,
        }
        let records = vec![
            Record { id: 1, x: 0., y: 0. },
            Record { id: 2, x: 5., y: 5. },
        ];
        let clusters =
            KMeansPP::clusters_by_with(records.clone(), 2, |r| (r.x, r.y), &mut rng(23))
                .expect("valid input");
        assert_eq!(clusters.len(), 2);
        let mut ids = clusters
            .iter()
            .flat_map(|c| c.points().iter().map(|r| r.id))
            .collect::<Vec<u32>>();
        ids.sort();
        assert_eq!(ids, vec![1, 2]);
        for cluster in &clusters {
            assert_eq!(cluster.points().len(), 1);
            assert!(records.contains(&cluster.points()[0]));
        }
    }
}
