//! Geographic coordinates and grouping keys

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns true if both components are finite and in range
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance to another coordinate in kilometres
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        haversine_distance(self, other)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Anything that can be pinned on a map
///
/// Only the raw position is exposed; the rest of the record stays opaque
/// to placement and matching.
pub trait Located {
    /// Raw latitude in degrees
    fn latitude(&self) -> f64;

    /// Raw longitude in degrees
    fn longitude(&self) -> f64;

    /// Raw position as a coordinate
    fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude(), self.longitude())
    }
}

impl Located for Coordinate {
    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn latitude(&self) -> f64 {
        (**self).latitude()
    }

    fn longitude(&self) -> f64 {
        (**self).longitude()
    }
}

/// Bucket for near-identical coordinates
///
/// Each component is scaled by `10^precision` and rounded to an integer so
/// the key can be hashed. Points straddling a rounding boundary can land in
/// different buckets even when they are closer than the bucket size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoordinateKey {
    lat: i64,
    lng: i64,
    precision: u32,
}

impl CoordinateKey {
    /// Key a coordinate at the given number of decimals
    pub fn new(coordinate: Coordinate, precision: u32) -> Self {
        debug_assert!(
            coordinate.latitude.is_finite() && coordinate.longitude.is_finite(),
            "coordinate must be finite: {:?}",
            coordinate
        );

        let scale = scale(precision);
        Self {
            lat: (coordinate.latitude * scale).round() as i64,
            lng: (coordinate.longitude * scale).round() as i64,
            precision,
        }
    }

    /// Key any located item
    pub fn of<L: Located + ?Sized>(item: &L, precision: u32) -> Self {
        Self::new(item.coordinate(), precision)
    }

    /// Rounded position this key stands for
    pub fn center(&self) -> Coordinate {
        let scale = scale(self.precision);
        Coordinate::new(self.lat as f64 / scale, self.lng as f64 / scale)
    }

    /// Number of decimals kept
    pub fn precision(&self) -> u32 {
        self.precision
    }
}

impl fmt::Display for CoordinateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let center = self.center();
        let p = self.precision as usize;
        write!(f, "{:.*},{:.*}", p, center.latitude, p, center.longitude)
    }
}

fn scale(precision: u32) -> f64 {
    10f64.powi(precision as i32)
}

/// Haversine distance between two coordinates in kilometres
pub fn haversine_distance(a: &Coordinate, b: &Coordinate) -> f64 {
    let (lat1, lng1) = (a.latitude.to_radians(), a.longitude.to_radians());
    let (lat2, lng2) = (b.latitude.to_radians(), b.longitude.to_radians());

    let dlat = lat2 - lat1;
    let dlng = lng2 - lng1;

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}
