use crate::error::TrackError;
use crate::track::{Coordinate, Track};
use anyhow::{Context, Result};
use serde_json::Value;
use std::{fs::File, io::BufReader, path::Path};

/// A track pulled out of a GeoJSON FeatureCollection, together with the
/// document it came from so that it can be written back later.
#[derive(Debug, Clone)]
pub struct LoadedTrack {
    pub document: Value,
    pub feature_index: usize,
    pub name: Option<String>,
    pub track: Track,
}

pub fn load_geojson<P: AsRef<Path>>(file_path: P, feature_index: usize) -> Result<LoadedTrack> {
    let file_path = file_path.as_ref();
    let document: Value = serde_json::from_reader(BufReader::new(
        File::open(file_path).with_context(|| format!("failed to open {}", file_path.display()))?,
    ))
    .map_err(|e| {
        TrackError::invalid_input(format!("{} is not valid JSON: {e}", file_path.display()))
    })?;
    let loaded = from_document(document, feature_index)
        .with_context(|| format!("failed to load track from {}", file_path.display()))?;
    info!(
        "loaded {} coordinates from {} (feature {})",
        loaded.track.len(),
        file_path.display(),
        feature_index
    );
    Ok(loaded)
}

pub fn parse_geojson(json: &str, feature_index: usize) -> Result<LoadedTrack> {
    let document: Value = serde_json::from_str(json)
        .map_err(|e| TrackError::invalid_input(format!("not valid JSON: {e}")))?;
    from_document(document, feature_index)
}

pub fn from_document(document: Value, feature_index: usize) -> Result<LoadedTrack> {
    let feature_path = format!("features[{feature_index}]");
    let features = document
        .get("features")
        .ok_or_else(|| TrackError::invalid_input("features: missing"))?
        .as_array()
        .ok_or_else(|| TrackError::invalid_input("features: expected an array"))?;
    let feature = features.get(feature_index).ok_or_else(|| {
        TrackError::invalid_input(format!(
            "{feature_path}: missing, the document has {} feature(s)",
            features.len()
        ))
    })?;

    let coordinates_path = format!("{feature_path}.geometry.coordinates");
    let positions = feature
        .get("geometry")
        .ok_or_else(|| TrackError::invalid_input(format!("{feature_path}.geometry: missing")))?
        .get("coordinates")
        .ok_or_else(|| TrackError::invalid_input(format!("{coordinates_path}: missing")))?
        .as_array()
        .ok_or_else(|| {
            TrackError::invalid_input(format!("{coordinates_path}: expected an array"))
        })?;

    let track = positions
        .iter()
        .enumerate()
        .map(|(i, position)| parse_position(position, &format!("{coordinates_path}[{i}]")))
        .collect::<Result<Track>>()?;
    if track.is_empty() {
        warn!("{coordinates_path} is empty");
    }

    let name = feature
        .get("properties")
        .and_then(|p| p.get("name"))
        .and_then(Value::as_str)
        .map(str::to_owned);

    Ok(LoadedTrack {
        document,
        feature_index,
        name,
        track,
    })
}

fn parse_position(position: &Value, path: &str) -> Result<Coordinate> {
    let numbers = position
        .as_array()
        .ok_or_else(|| TrackError::invalid_input(format!("{path}: expected an array")))?;
    if numbers.len() < 2 {
        return Err(TrackError::invalid_input(format!(
            "{path}: expected at least 2 numbers, got {}",
            numbers.len()
        )));
    }
    let number = |i: usize| {
        numbers[i]
            .as_f64()
            .ok_or_else(|| TrackError::invalid_input(format!("{path}[{i}]: expected a number")))
    };
    let longitude = number(0)?;
    let latitude = number(1)?;
    if !(-180. ..=180.).contains(&longitude) {
        bail!(TrackError::InvalidInput(format!(
            "{path}[0]: longitude {longitude} is out of range"
        )));
    }
    if !(-90. ..=90.).contains(&latitude) {
        bail!(TrackError::InvalidInput(format!(
            "{path}[1]: latitude {latitude} is out of range"
        )));
    }
    let altitude = if numbers.len() > 2 {
        Some(number(2)?)
    } else {
        None
    };
    Ok(Coordinate {
        longitude,
        latitude,
        altitude,
    })
}
