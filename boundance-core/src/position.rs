//! Geographic positions

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A geographic position: longitude and latitude in degrees, with an
/// optional elevation.
///
/// On the wire a position is a GeoJSON coordinate array of two or three
/// numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub lon: f64,
    pub lat: f64,
    pub elevation: Option<f64>,
}

impl Position {
    /// Create a two-dimensional position
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat, elevation: None }
    }

    /// Create a position carrying an elevation
    pub const fn with_elevation(lon: f64, lat: f64, elevation: f64) -> Self {
        Self { lon, lat, elevation: Some(elevation) }
    }

    /// Number of coordinates this position serializes to
    pub fn dimension(&self) -> usize {
        if self.elevation.is_some() { 3 } else { 2 }
    }
}

impl From<(f64, f64)> for Position {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self::new(lon, lat)
    }
}

impl From<[f64; 2]> for Position {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self::new(lon, lat)
    }
}

impl From<[f64; 3]> for Position {
    fn from([lon, lat, elevation]: [f64; 3]) -> Self {
        Self::with_elevation(lon, lat, elevation)
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.dimension()))?;
        seq.serialize_element(&self.lon)?;
        seq.serialize_element(&self.lat)?;
        if let Some(elevation) = &self.elevation {
            seq.serialize_element(elevation)?;
        }
        seq.end()
    }
}

struct PositionVisitor;

impl<'de> Visitor<'de> for PositionVisitor {
    type Value = Position;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a coordinate array of two or three numbers")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Position, A::Error> {
        let lon: f64 = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let lat: f64 = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        let elevation: Option<f64> = seq.next_element()?;
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(4, &self));
        }
        Ok(Position { lon, lat, elevation })
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(PositionVisitor)
    }
}
