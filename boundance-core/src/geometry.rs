//! GeoJSON geometry types

use crate::position::Position;
use crate::Error;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// A closed loop of positions. The first and last position are expected to
/// coincide, but nothing here enforces it.
pub type Ring = Vec<Position>;

/// The rings of one polygon: the outer boundary first, then its holes
pub type RingSet = Vec<Ring>;

/// A GeoJSON geometry object.
///
/// Every kind GeoJSON defines can be parsed, but only [`Geometry::Polygon`]
/// and [`Geometry::MultiPolygon`] describe region boundaries; the other kinds
/// exist so that documents carrying them are rejected with a typed error
/// rather than a parse failure.
///
/// The set of kinds is closed. A `type` outside the seven GeoJSON kinds is
/// not a geometry at all and fails to deserialize; see [`GeometryKind::from_str`]
/// for checking a tag up front.
///
/// Polygonal geometries keep their `bbox` and any foreign members so that a
/// reduced boundary serializes with everything but its coordinates intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        coordinates: Position,
    },
    MultiPoint {
        coordinates: Vec<Position>,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    Polygon {
        coordinates: RingSet,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bbox: Option<Vec<f64>>,
        #[serde(flatten)]
        foreign_members: Map<String, Value>,
    },
    MultiPolygon {
        coordinates: Vec<RingSet>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bbox: Option<Vec<f64>>,
        #[serde(flatten)]
        foreign_members: Map<String, Value>,
    },
    GeometryCollection {
        geometries: Vec<Geometry>,
    },
}

/// The `type` discriminant of a [`Geometry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryKind {
    /// The GeoJSON `type` string for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::LineString => "LineString",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPolygon => "MultiPolygon",
            GeometryKind::GeometryCollection => "GeometryCollection",
        }
    }

    /// Whether this kind describes an area boundary
    pub fn is_polygonal(&self) -> bool {
        matches!(self, GeometryKind::Polygon | GeometryKind::MultiPolygon)
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryKind {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "Point" => Ok(GeometryKind::Point),
            "MultiPoint" => Ok(GeometryKind::MultiPoint),
            "LineString" => Ok(GeometryKind::LineString),
            "MultiLineString" => Ok(GeometryKind::MultiLineString),
            "Polygon" => Ok(GeometryKind::Polygon),
            "MultiPolygon" => Ok(GeometryKind::MultiPolygon),
            "GeometryCollection" => Ok(GeometryKind::GeometryCollection),
            other => Err(Error::InvalidData(format!("unknown geometry type \"{}\"", other))),
        }
    }
}

impl Geometry {
    /// Create a polygon from its rings
    pub fn polygon(rings: RingSet) -> Self {
        Geometry::Polygon {
            coordinates: rings,
            bbox: None,
            foreign_members: Map::new(),
        }
    }

    /// Create a multi-polygon from its ring-sets
    pub fn multi_polygon(ring_sets: Vec<RingSet>) -> Self {
        Geometry::MultiPolygon {
            coordinates: ring_sets,
            bbox: None,
            foreign_members: Map::new(),
        }
    }

    /// The `type` discriminant of this geometry
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point { .. } => GeometryKind::Point,
            Geometry::MultiPoint { .. } => GeometryKind::MultiPoint,
            Geometry::LineString { .. } => GeometryKind::LineString,
            Geometry::MultiLineString { .. } => GeometryKind::MultiLineString,
            Geometry::Polygon { .. } => GeometryKind::Polygon,
            Geometry::MultiPolygon { .. } => GeometryKind::MultiPolygon,
            Geometry::GeometryCollection { .. } => GeometryKind::GeometryCollection,
        }
    }

    /// Iterate over every polygon ring in the geometry.
    ///
    /// Non-polygonal geometries yield nothing.
    pub fn rings(&self) -> Box<dyn Iterator<Item = &Ring> + '_> {
        match self {
            Geometry::Polygon { coordinates, .. } => Box::new(coordinates.iter()),
            Geometry::MultiPolygon { coordinates, .. } => Box::new(coordinates.iter().flatten()),
            _ => Box::new(std::iter::empty()),
        }
    }

    /// Number of polygon rings in the geometry
    pub fn ring_count(&self) -> usize {
        self.rings().count()
    }

    /// Total number of positions across every polygon ring
    pub fn vertex_count(&self) -> usize {
        self.rings().map(Vec::len).sum()
    }
}
