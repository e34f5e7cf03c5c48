use crate::track::Track;
use crate::track_simplifier::{self, FirstPointPolicy, DEFAULT_THRESHOLD};
use crate::utils::Meters;
use anyhow::Result;

/// Everything that changes how a track is loaded and simplified.
#[derive(Clone, Debug, PartialEq)]
pub struct SimplifyConfig {
    pub threshold: Meters,
    pub first_point: FirstPointPolicy,
    pub feature_index: usize,
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        SimplifyConfig {
            threshold: DEFAULT_THRESHOLD,
            first_point: FirstPointPolicy::default(),
            feature_index: 0,
        }
    }
}

impl SimplifyConfig {
    pub fn apply(&self, track: &Track) -> Result<Track> {
        track_simplifier::simplify_with_policy(track, self.threshold, self.first_point)
    }
}
