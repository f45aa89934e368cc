/// Errors that reject a clustering request before any work begins.
///
/// Clustering either fully completes or fails here; there is no
/// partial-success output and nothing transient to retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    /// The input point set is empty.
    NoPoints,
    /// Zero clusters were requested.
    NoClusters,
    /// More clusters were requested than points exist.
    TooManyClusters { k: usize, n: usize },
}

impl std::fmt::Display for ClusterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPoints => write!(f, "cannot cluster an empty point set"),
            Self::NoClusters => write!(f, "cannot cluster into zero groups"),
            Self::TooManyClusters { k, n } => {
                write!(f, "cannot cluster {} points into {} groups", n, k)
            }
        }
    }
}

impl std::error::Error for ClusterError {}
