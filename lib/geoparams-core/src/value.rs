//! Composite values and their wire encodings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair.
///
/// Encodes as `lat,lng`. Rust float formatting never depends on the locale,
/// so there are no thousands separators and the decimal mark is always `.`.
///
/// ```
/// use geoparams_core::Coordinate;
///
/// assert_eq!(Coordinate::new(40.714728, -73.998672).to_string(), "40.714728,-73.998672");
/// assert_eq!(Coordinate::new(1.0, 0.5).to_string(), "1,0.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl Coordinate {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

/// A place given either as a coordinate or as a free-text address.
///
/// ```
/// use geoparams_core::{Coordinate, Location};
///
/// let here = Location::from(Coordinate::new(46.414382, 10.013988));
/// assert_eq!(here.to_string(), "46.414382,10.013988");
///
/// let there = Location::address("Chagrin Falls, OH");
/// assert_eq!(there.to_string(), "Chagrin Falls, OH");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Location {
    /// Latitude/longitude.
    Coordinate(Coordinate),
    /// Address text, sent verbatim.
    Address(String),
}

impl Location {
    /// Create an address location.
    #[must_use]
    pub fn address(address: impl Into<String>) -> Self {
        Self::Address(address.into())
    }

    /// Returns `true` for an address made only of whitespace.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Coordinate(_) => false,
            Self::Address(address) => address.trim().is_empty(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coordinate(coordinate) => fmt::Display::fmt(coordinate, f),
            Self::Address(address) => f.write_str(address),
        }
    }
}

impl From<Coordinate> for Location {
    fn from(coordinate: Coordinate) -> Self {
        Self::Coordinate(coordinate)
    }
}

/// Image dimensions in pixels, encoded as `WxH`.
///
/// No positivity check happens here; endpoints decide what they accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl MapSize {
    /// Create a size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for MapSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
