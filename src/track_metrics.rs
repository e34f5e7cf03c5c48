use itertools::Itertools;

use crate::track::{Coordinate, Track};
use crate::utils::{Kilometers, Meters};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClosestPoint {
    pub index: usize,
    pub distance: Meters,
}

/// Straight geodesic distance between the first and the last point. This is
/// not the length of the path.
pub fn endpoint_distance(track: &Track) -> Option<Kilometers> {
    match (track.first(), track.last()) {
        (Some(first), Some(last)) => Some(first.distance_to(last).to_kilometers()),
        _ => None,
    }
}

pub fn total_length(track: &Track) -> Meters {
    track
        .coordinates
        .iter()
        .tuple_windows()
        .map(|(a, b)| a.distance_to(b))
        .sum()
}

/// `result[i]` is the distance from point `i` to the end of the track,
/// walking along the track. The last entry is always zero.
pub fn distances_to_end(track: &Track) -> Vec<Meters> {
    let gaps: Vec<Meters> = track
        .coordinates
        .iter()
        .tuple_windows()
        .map(|(a, b)| a.distance_to(b))
        .collect();
    let mut distances = vec![Meters::ZERO; track.len()];
    // walk backwards from the second-to-last point
    for (i, gap) in gaps.iter().enumerate().rev() {
        distances[i] = distances[i + 1] + *gap;
    }
    distances
}

/// First index with the minimal distance to `target`.
pub fn find_closest_point(track: &Track, target: &Coordinate) -> Option<ClosestPoint> {
    track
        .coordinates
        .iter()
        .enumerate()
        .map(|(index, c)| ClosestPoint {
            index,
            distance: target.distance_to(c),
        })
        .fold(None, |best: Option<ClosestPoint>, curr| match best {
            Some(best) if best.distance <= curr.distance => Some(best),
            _ => Some(curr),
        })
}

/// A named stretch of the track, given by inclusive point indices.
#[derive(Clone, Debug, PartialEq)]
pub struct Stage {
    pub id: String,
    pub name: String,
    pub start_idx: usize,
    pub end_idx: usize,
    pub end_label: String,
}

impl Stage {
    pub fn contains(&self, index: usize) -> bool {
        (self.start_idx..=self.end_idx).contains(&index)
    }
}

/// The first stage whose range holds `index`. Overlapping stages share their
/// boundary point, which then belongs to the earlier one.
pub fn current_stage(stages: &[Stage], index: usize) -> Option<&Stage> {
    stages.iter().find(|stage| stage.contains(index))
}

/// Distance along the track from point `index` to the end of `stage`, using
/// the output of [`distances_to_end`]. None if either index is past the end
/// of `distances`.
pub fn distance_to_end_of_stage(
    distances: &[Meters],
    index: usize,
    stage: &Stage,
) -> Option<Meters> {
    let here = distances.get(index)?;
    let stage_end = distances.get(stage.end_idx)?;
    Some(*here - *stage_end)
}
