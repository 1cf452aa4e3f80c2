use geo_types::{Coord, Point};
use serde::{Deserialize, Serialize};

/// Trait for types that can provide a latitude/longitude in degrees.
///
/// Implemented for [`LatLon`], `geo_types::Point<f64>` and `geo_types::Coord<f64>`
/// (x is longitude, y is latitude), and `(f64, f64)` tuples read as `(lon, lat)`.
/// No normalization is applied; out-of-range values simply match no chart.
pub trait Coordinate {
    /// Returns the latitude in degrees (north positive).
    fn lat(&self) -> f64;
    /// Returns the longitude in degrees (east positive, western hemisphere negative).
    fn lon(&self) -> f64;
}

/// A geographic position in degrees, latitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl Coordinate for LatLon {
    fn lat(&self) -> f64 {
        self.lat
    }
    fn lon(&self) -> f64 {
        self.lon
    }
}

impl Coordinate for (f64, f64) {
    fn lat(&self) -> f64 {
        self.1
    }
    fn lon(&self) -> f64 {
        self.0
    }
}

impl Coordinate for Point<f64> {
    fn lat(&self) -> f64 {
        self.y()
    }
    fn lon(&self) -> f64 {
        self.x()
    }
}

impl Coordinate for Coord<f64> {
    fn lat(&self) -> f64 {
        self.y
    }
    fn lon(&self) -> f64 {
        self.x
    }
}

impl From<LatLon> for Point<f64> {
    fn from(value: LatLon) -> Self {
        Point::new(value.lon, value.lat)
    }
}
