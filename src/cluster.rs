use super::*;

/// One output group: a centroid and the members assigned to it.
///
/// Read-only view produced once after relaxation. The member type is
/// whatever the caller clustered: coordinate pairs, or original records
/// when a projection was supplied.
#[derive(Debug)]
pub struct Cluster<T> {
    centroid: Centroid,
    points: Vec<T>,
}

impl<T> Cluster<T> {
    pub fn centroid(&self) -> &Centroid {
        &self.centroid
    }
    pub fn points(&self) -> &[T] {
        &self.points
    }
    pub fn into_points(self) -> Vec<T> {
        self.points
    }

    /// Partitions records by their final assignment, one cluster per
    /// centroid index, preserving input relative order within each
    /// cluster. Clusters that end a run empty are still emitted.
    pub fn assemble(records: Vec<T>, groups: &[Group], centroids: &[Centroid]) -> Vec<Self> {
        let mut clusters = centroids
            .iter()
            .map(|centroid| Self {
                centroid: *centroid,
                points: Vec::new(),
            })
            .collect::<Vec<Self>>();
        for (record, group) in records.into_iter().zip(groups.iter()) {
            clusters[*group].points.push(record);
        }
        clusters
    }
}

impl<T> std::fmt::Display for Cluster<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Cluster {}: [", self.centroid)?;
        for point in &self.points {
            writeln!(f, "  {},", point)?;
        }
        writeln!(f, "]")
    }
}
