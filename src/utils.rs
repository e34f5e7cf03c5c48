use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

use geo::{GeodesicDistance, Point};

use crate::track::Coordinate;

// Distances are kept in two distinct types so that a threshold in meters can
// never be compared against a summary value in kilometers by accident.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Meters(pub f64);

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Kilometers(pub f64);

impl Meters {
    pub const ZERO: Meters = Meters(0.);

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn to_kilometers(self) -> Kilometers {
        Kilometers(self.0 / 1000.)
    }
}

impl Kilometers {
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn to_meters(self) -> Meters {
        Meters(self.0 * 1000.)
    }
}

impl Add for Meters {
    type Output = Meters;
    fn add(self, rhs: Meters) -> Meters {
        Meters(self.0 + rhs.0)
    }
}

impl Sub for Meters {
    type Output = Meters;
    fn sub(self, rhs: Meters) -> Meters {
        Meters(self.0 - rhs.0)
    }
}

impl Sum for Meters {
    fn sum<I: Iterator<Item = Meters>>(iter: I) -> Meters {
        iter.fold(Meters::ZERO, |acc, x| acc + x)
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} m", self.0)
    }
}

impl fmt::Display for Kilometers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} km", self.0)
    }
}

/// Distance along the WGS-84 ellipsoid (Karney's algorithm).
pub fn geodesic_distance(a: &Coordinate, b: &Coordinate) -> Meters {
    let a = Point::new(a.longitude, a.latitude);
    let b = Point::new(b.longitude, b.latitude);
    Meters(a.geodesic_distance(&b))
}
