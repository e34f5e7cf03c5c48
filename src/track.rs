use crate::utils::{self, Meters};

/// A GeoJSON position. `altitude` is carried along for export but never takes
/// part in distance computation.
#[derive(Clone, Debug, PartialEq)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: Option<f64>,
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Coordinate {
            longitude,
            latitude,
            altitude: None,
        }
    }

    pub fn with_altitude(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Coordinate {
            longitude,
            latitude,
            altitude: Some(altitude),
        }
    }

    pub fn distance_to(&self, other: &Coordinate) -> Meters {
        utils::geodesic_distance(self, other)
    }

    /// `[lon, lat]` or `[lon, lat, alt]`, in GeoJSON order.
    pub fn to_position(&self) -> Vec<f64> {
        match self.altitude {
            None => vec![self.longitude, self.latitude],
            Some(altitude) => vec![self.longitude, self.latitude, altitude],
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Track {
    pub coordinates: Vec<Coordinate>,
}

impl Track {
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Track { coordinates }
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn first(&self) -> Option<&Coordinate> {
        self.coordinates.first()
    }

    pub fn last(&self) -> Option<&Coordinate> {
        self.coordinates.last()
    }
}

impl From<Vec<(f64, f64)>> for Track {
    fn from(lon_lat: Vec<(f64, f64)>) -> Self {
        Track::new(
            lon_lat
                .into_iter()
                .map(|(lon, lat)| Coordinate::new(lon, lat))
                .collect(),
        )
    }
}

impl FromIterator<Coordinate> for Track {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Track::new(iter.into_iter().collect())
    }
}
