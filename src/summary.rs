use std::fmt;

use crate::track::Track;
use crate::track_metrics;
use crate::utils::Kilometers;

#[derive(Clone, Debug, PartialEq)]
pub struct SimplifyReport {
    pub endpoint_distance: Kilometers,
    pub original_count: usize,
    pub reduced_count: usize,
}

impl SimplifyReport {
    /// `endpoint_distance` is measured on the original track.
    pub fn new(original: &Track, reduced: &Track) -> Self {
        SimplifyReport {
            endpoint_distance: track_metrics::endpoint_distance(original).unwrap_or_default(),
            original_count: original.len(),
            reduced_count: reduced.len(),
        }
    }

    pub fn reduction_message(&self) -> String {
        format!(
            "Reduced from {} to {} points",
            self.original_count, self.reduced_count
        )
    }
}

impl fmt::Display for SimplifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Distance between endpoints: {}", self.endpoint_distance)?;
        write!(f, "{}", self.reduction_message())
    }
}
