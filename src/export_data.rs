use crate::import_data::LoadedTrack;
use crate::track::Track;
use anyhow::Result;
use geo::Point;
use gpx::{Gpx, GpxVersion, TrackSegment, Waypoint};
use serde_json::Value;
use std::io::Write;

pub const GPX_CREATOR: &str = "trail_track";

/// The source document with the loaded feature's coordinates replaced by
/// `track`. Everything else (properties, other features) is left as is.
pub fn track_to_geojson(loaded: &LoadedTrack, track: &Track) -> Result<Value> {
    let mut document = loaded.document.clone();
    let coordinates = document
        .get_mut("features")
        .and_then(|f| f.get_mut(loaded.feature_index))
        .and_then(|f| f.get_mut("geometry"))
        .and_then(|g| g.get_mut("coordinates"))
        .ok_or_else(|| {
            anyhow!(
                "features[{}].geometry.coordinates is gone from the loaded document",
                loaded.feature_index
            )
        })?;
    *coordinates = Value::Array(
        track
            .coordinates
            .iter()
            .map(|c| Value::from(c.to_position()))
            .collect(),
    );
    Ok(document)
}

pub fn write_geojson<W: Write>(loaded: &LoadedTrack, track: &Track, mut writer: W) -> Result<()> {
    let document = track_to_geojson(loaded, track)?;
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writer.flush()?;
    Ok(())
}

pub fn track_to_gpx(track: &Track, name: Option<&str>) -> Gpx {
    let mut segment = TrackSegment::new();
    for coordinate in &track.coordinates {
        let mut waypoint = Waypoint::new(Point::new(coordinate.longitude, coordinate.latitude));
        waypoint.elevation = coordinate.altitude;
        segment.points.push(waypoint);
    }
    let mut gpx_track = gpx::Track::new();
    gpx_track.name = Some(name.unwrap_or("Track 1").to_string());
    gpx_track.segments.push(segment);

    Gpx {
        version: GpxVersion::Gpx11,
        creator: Some(GPX_CREATOR.to_string()),
        tracks: vec![gpx_track],
        ..Default::default()
    }
}

pub fn write_gpx<W: Write>(track: &Track, name: Option<&str>, mut writer: W) -> Result<()> {
    let gpx = track_to_gpx(track, name);
    gpx::write(&gpx, &mut writer)?;
    writer.flush()?;
    Ok(())
}
