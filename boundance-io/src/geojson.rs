//! GeoJSON documents
//!
//! Region boundary files are normally FeatureCollections, but a lone Feature
//! or a bare geometry object is accepted too and wrapped into a collection.
//! Geometry `type` tags are checked before deserializing, so an unknown kind
//! is reported by name as [`Error::InvalidData`].

use crate::{FeatureCollectionReader, FeatureCollectionWriter};
use boundance_core::{Error, Feature, FeatureCollection, Geometry, GeometryKind, Result};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Fail on a geometry, or a geometry nested in a collection, whose `type`
/// is not a GeoJSON geometry kind. Missing tags are left for serde to report.
fn check_geometry_type(geometry: &Value) -> Result<()> {
    let Some(tag) = geometry.get("type").and_then(Value::as_str) else {
        return Ok(());
    };
    if tag.parse::<GeometryKind>()? == GeometryKind::GeometryCollection {
        for member in geometry.get("geometries").and_then(Value::as_array).into_iter().flatten() {
            check_geometry_type(member)?;
        }
    }
    Ok(())
}

fn check_feature(feature: &Value) -> Result<()> {
    match feature.get("geometry") {
        Some(geometry) => check_geometry_type(geometry),
        None => Ok(()),
    }
}

/// GeoJSON reader and writer
pub struct GeoJson;

impl GeoJson {
    /// Parse a GeoJSON document into a feature collection
    pub fn parse(text: &str) -> Result<FeatureCollection> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Convert an already-parsed JSON value into a feature collection
    pub fn from_value(value: Value) -> Result<FeatureCollection> {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::InvalidData("GeoJSON object has no \"type\" member".to_string()))?;

        match kind {
            "FeatureCollection" => {
                for feature in value.get("features").and_then(Value::as_array).into_iter().flatten() {
                    check_feature(feature)?;
                }
                Ok(serde_json::from_value(value)?)
            }
            "Feature" => {
                check_feature(&value)?;
                let feature: Feature = serde_json::from_value(value)?;
                Ok(FeatureCollection::new(vec![feature]))
            }
            _ => {
                check_geometry_type(&value)?;
                let geometry: Geometry = serde_json::from_value(value)?;
                Ok(FeatureCollection::new(vec![Feature::new(geometry)]))
            }
        }
    }

    /// Serialize a feature collection to a compact GeoJSON string
    pub fn to_string(collection: &FeatureCollection) -> Result<String> {
        Ok(serde_json::to_string(collection)?)
    }
}

impl FeatureCollectionReader for GeoJson {
    fn read_feature_collection<P: AsRef<Path>>(path: P) -> Result<FeatureCollection> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("GeoJSON file not found: {}", path.display()),
            )));
        }

        let reader = BufReader::new(File::open(path)?);
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }
}

impl FeatureCollectionWriter for GeoJson {
    fn write_feature_collection<P: AsRef<Path>>(collection: &FeatureCollection, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, collection)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boundance_core::{GeometryKind, Position};

    #[test]
    fn test_parse_collection() {
        let json = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":null,"geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}}
        ]}"#;
        let collection = GeoJson::parse(json).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.features[0].properties, None);
    }

    #[test]
    fn test_parse_lone_feature_and_geometry() {
        let feature = r#"{"type":"Feature","properties":{"name":"x"},"geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[0,0]]]}}"#;
        let collection = GeoJson::parse(feature).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.features[0].property("name").unwrap(), "x");

        let geometry = r#"{"type":"MultiPolygon","coordinates":[[[[0,0],[1,0],[0,0]]]]}"#;
        let collection = GeoJson::parse(geometry).unwrap();
        assert_eq!(collection.features[0].geometry.kind(), GeometryKind::MultiPolygon);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(GeoJson::parse("{}"), Err(Error::InvalidData(_))));
        assert!(matches!(GeoJson::parse("not json"), Err(Error::Json(_))));
        assert!(matches!(GeoJson::parse(r#"{"type":"Sphere"}"#), Err(Error::InvalidData(_))));
        assert!(matches!(
            GeoJson::parse(r#"{"type":"Polygon","coordinates":[[[0,0],[1]]]}"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_unknown_geometry_type_is_named() {
        let json = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{},"geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[0,0]]]}},
            {"type":"Feature","properties":{},"geometry":{"type":"Circle","center":[0,0],"radius":1}}
        ]}"#;
        match GeoJson::parse(json) {
            Err(Error::InvalidData(message)) => assert!(message.contains("Circle")),
            other => panic!("expected InvalidData, got {:?}", other),
        }

        let nested = r#"{"type":"Feature","properties":{},"geometry":{"type":"GeometryCollection","geometries":[{"type":"Arc"}]}}"#;
        match GeoJson::parse(nested) {
            Err(Error::InvalidData(message)) => assert!(message.contains("Arc")),
            other => panic!("expected InvalidData, got {:?}", other),
        }
    }

    #[test]
    fn test_geometry_members_survive_round_trip() {
        let json = r#"{"type":"FeatureCollection","features":[{
            "type":"Feature",
            "properties":{"name":"square"},
            "geometry":{"type":"Polygon","bbox":[0,0,1,1],"crs_hint":"x","coordinates":[[[0,0],[0,1],[1,1],[1,0],[0,0]]]}
        }]}"#;
        let collection = GeoJson::parse(json).unwrap();
        let text = GeoJson::to_string(&collection).unwrap();

        let value: Value = serde_json::from_str(&text).unwrap();
        let geometry = &value["features"][0]["geometry"];
        assert_eq!(geometry["type"], "Polygon");
        assert_eq!(geometry["bbox"], serde_json::json!([0.0, 0.0, 1.0, 1.0]));
        assert_eq!(geometry["crs_hint"], "x");
        assert_eq!(geometry["coordinates"][0].as_array().unwrap().len(), 5);
        assert_eq!(GeoJson::parse(&text).unwrap(), collection);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("square.geo.json");
        let collection = FeatureCollection::new(vec![Feature::new(Geometry::polygon(vec![vec![
            Position::new(0.0, 0.0),
            Position::new(0.0, 1.0),
            Position::new(1.0, 1.0),
            Position::new(0.0, 0.0),
        ]]))]);

        GeoJson::write_feature_collection(&collection, &path).unwrap();
        let loaded = GeoJson::read_feature_collection(&path).unwrap();
        assert_eq!(loaded, collection);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = GeoJson::read_feature_collection(dir.path().join("missing.geo.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
