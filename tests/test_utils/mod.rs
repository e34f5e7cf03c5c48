#![allow(dead_code)]

use itertools::Itertools;
use trail_track::import_data::{self, LoadedTrack};
use trail_track::track::Track;
use trail_track::utils::Meters;

pub const SAMPLE_TRACK_PATH: &str = "./tests/data/sample_track.geojson";

// 11 points walking north along 135.5E, 0.0005 degrees (~55.5m) apart.
pub fn load_sample_track() -> LoadedTrack {
    import_data::load_geojson(SAMPLE_TRACK_PATH, 0).unwrap()
}

// Crosses the equator along the prime meridian.
pub fn equator_track() -> Track {
    Track::from(vec![
        (0., -0.003),
        (0., -0.0025),
        (0., -0.001),
        (0., 0.),
        (0., 0.0005),
        (0., 0.002),
        (0., 0.0021),
        (0.0005, 0.0021),
        (0.002, 0.0021),
    ])
}

pub fn assert_min_gap(track: &Track, threshold: Meters) {
    for (a, b) in track.coordinates.iter().tuple_windows() {
        let d = a.distance_to(b);
        assert!(
            d >= threshold,
            "{a:?} and {b:?} are only {d} apart, threshold is {threshold}"
        );
    }
}
