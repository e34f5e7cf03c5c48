pub mod test_utils;

use assert_float_eq::*;
use trail_track::summary::SimplifyReport;
use trail_track::track::{Coordinate, Track};
use trail_track::track_metrics::{
    current_stage, distance_to_end_of_stage, distances_to_end, endpoint_distance,
    find_closest_point, total_length, Stage,
};
use trail_track::track_simplifier::{simplify, DEFAULT_THRESHOLD};

#[test]
fn endpoint_distance_is_not_path_length() {
    // out and back
    let track = Track::from(vec![(0., 0.), (0., 0.002), (0., 0.)]);
    assert!(endpoint_distance(&track).unwrap().value().abs() < 1e-9);
    assert_float_absolute_eq!(total_length(&track).value(), 442.3, 0.1);
}

#[test]
fn sample_track() {
    let loaded = test_utils::load_sample_track();
    let track = &loaded.track;

    // ~110.92 km per degree of latitude at 33.84N
    let km = endpoint_distance(track).unwrap();
    assert_float_absolute_eq!(km.value(), 0.5546, 0.001);
    assert_float_absolute_eq!(total_length(track).value(), km.to_meters().value(), 0.01);

    let distances = distances_to_end(track);
    assert_eq!(distances.len(), track.len());
    assert_eq!(distances.last().unwrap().value(), 0.);
    assert_float_absolute_eq!(distances[0].value(), total_length(track).value(), 1e-6);
    for pair in distances.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[test]
fn closest_point() {
    let loaded = test_utils::load_sample_track();
    let track = &loaded.track;

    let closest = find_closest_point(track, &Coordinate::new(135.5001, 33.8421)).unwrap();
    assert_eq!(closest.index, 4);
    assert!(closest.distance.value() < 20.);

    // exactly on a point
    let closest = find_closest_point(track, &track.coordinates[7]).unwrap();
    assert_eq!(closest.index, 7);
    assert!(closest.distance.value() < 1e-9);

    assert!(find_closest_point(&Track::default(), &Coordinate::new(0., 0.)).is_none());
}

#[test]
fn closest_point_prefers_first_index() {
    let track = Track::from(vec![(0., 0.001), (0., 0.), (0., 0.001)]);
    let closest = find_closest_point(&track, &Coordinate::new(0., 0.001)).unwrap();
    assert_eq!(closest.index, 0);
}

#[test]
fn report() {
    let loaded = test_utils::load_sample_track();
    let simplified = simplify(&loaded.track, DEFAULT_THRESHOLD).unwrap();
    let report = SimplifyReport::new(&loaded.track, &simplified);
    assert_eq!(report.original_count, 11);
    assert_eq!(report.reduced_count, 6);
    assert_eq!(report.reduction_message(), "Reduced from 11 to 6 points");
    assert_eq!(
        report.to_string().lines().next(),
        Some("Distance between endpoints: 0.555 km")
    );
}

fn sample_stages() -> Vec<Stage> {
    let stage = |id: &str, start_idx, end_idx, end_label: &str| Stage {
        id: id.to_string(),
        name: format!("Stage {id}"),
        start_idx,
        end_idx,
        end_label: end_label.to_string(),
    };
    vec![stage("1", 0, 4, "Shrine"), stage("2", 4, 8, "Pass")]
}

#[test]
fn stages() {
    let stages = sample_stages();
    assert_eq!(current_stage(&stages, 0).unwrap().id, "1");
    assert_eq!(current_stage(&stages, 3).unwrap().id, "1");
    // shared boundary goes to the earlier stage
    assert_eq!(current_stage(&stages, 4).unwrap().id, "1");
    assert_eq!(current_stage(&stages, 5).unwrap().id, "2");
    assert_eq!(current_stage(&stages, 8).unwrap().end_label, "Pass");
    assert!(current_stage(&stages, 9).is_none());
    assert!(current_stage(&[], 0).is_none());
}

#[test]
fn distance_to_stage_end() {
    let loaded = test_utils::load_sample_track();
    let distances = distances_to_end(&loaded.track);
    let stages = sample_stages();

    let stage = current_stage(&stages, 1).unwrap();
    // three ~55.5m steps from point 1 to point 4
    let d = distance_to_end_of_stage(&distances, 1, stage).unwrap();
    assert_float_absolute_eq!(d.value(), 166.4, 0.5);
    assert_float_absolute_eq!(
        distance_to_end_of_stage(&distances, 4, stage).unwrap().value(),
        0.,
        1e-9
    );

    // past the end of the track
    assert!(distance_to_end_of_stage(&distances, 11, stage).is_none());
    let long_stage = Stage {
        end_idx: 20,
        ..stage.clone()
    };
    assert!(distance_to_end_of_stage(&distances, 1, &long_stage).is_none());
}
