use crate::{
    error::TrackError,
    track::{Coordinate, Track},
    utils::Meters,
};
use anyhow::Result;

pub const DEFAULT_THRESHOLD: Meters = Meters(100.);

#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, strum_macros::Display, clap::ValueEnum,
)]
#[strum(serialize_all = "kebab-case")]
pub enum FirstPointPolicy {
    /// The first point is always part of the output and becomes the first
    /// reference.
    #[default]
    AlwaysKeep,
    /// The first point is compared against itself like every other point, so
    /// it only survives when the threshold is zero.
    CompareWithSelf,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProcessResult {
    Keep,
    Drop,
}

pub struct TrackSimplifier {
    threshold: Meters,
    policy: FirstPointPolicy,
    reference: Option<Coordinate>,
}

impl TrackSimplifier {
    pub fn new(threshold: Meters, policy: FirstPointPolicy) -> Result<Self> {
        if !threshold.value().is_finite() || threshold.value() < 0. {
            return Err(TrackError::invalid_input(format!(
                "threshold must be a finite, non-negative number of meters, got {}",
                threshold.value()
            )));
        }
        Ok(TrackSimplifier {
            threshold,
            policy,
            reference: None,
        })
    }

    pub fn threshold(&self) -> Meters {
        self.threshold
    }

    /// The last kept point, or the seed point under `CompareWithSelf`.
    pub fn reference(&self) -> Option<&Coordinate> {
        self.reference.as_ref()
    }

    pub fn process(&mut self, curr: &Coordinate) -> ProcessResult {
        if self.reference.is_none() && self.policy == FirstPointPolicy::CompareWithSelf {
            // the first point seeds the reference whether or not it is kept
            self.reference = Some(curr.clone());
        }
        let result = self.compare(curr);
        if result == ProcessResult::Keep {
            self.reference = Some(curr.clone());
        }
        result
    }

    // No reference yet means the first point under `AlwaysKeep`.
    fn compare(&self, curr: &Coordinate) -> ProcessResult {
        match &self.reference {
            Some(reference) if reference.distance_to(curr) < self.threshold => {
                ProcessResult::Drop
            }
            _ => ProcessResult::Keep,
        }
    }
}

pub fn simplify(track: &Track, threshold: Meters) -> Result<Track> {
    simplify_with_policy(track, threshold, FirstPointPolicy::default())
}

pub fn simplify_with_policy(
    track: &Track,
    threshold: Meters,
    policy: FirstPointPolicy,
) -> Result<Track> {
    if track.is_empty() {
        return Err(TrackError::invalid_input(
            "track has no coordinates, there is no reference point to start from",
        ));
    }
    let mut simplifier = TrackSimplifier::new(threshold, policy)?;
    let simplified: Track = track
        .coordinates
        .iter()
        .filter(|c| simplifier.process(c) == ProcessResult::Keep)
        .cloned()
        .collect();
    debug!(
        "simplified track with threshold {} ({}): {} -> {} points",
        threshold,
        policy,
        track.len(),
        simplified.len()
    );
    Ok(simplified)
}
