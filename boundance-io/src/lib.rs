//! I/O operations for region boundaries
//!
//! This crate reads and writes GeoJSON boundary documents and provides the
//! [`RegionStore`], the read-only owner of every region's canonical geometry.

pub mod geojson;
pub mod store;

pub use geojson::GeoJson;
pub use store::*;

use boundance_core::{Error, FeatureCollection, Result};
use std::path::Path;

/// Trait for reading feature collections from files
pub trait FeatureCollectionReader {
    fn read_feature_collection<P: AsRef<Path>>(path: P) -> Result<FeatureCollection>;
}

/// Trait for writing feature collections to files
pub trait FeatureCollectionWriter {
    fn write_feature_collection<P: AsRef<Path>>(collection: &FeatureCollection, path: P) -> Result<()>;
}

/// Auto-detect format and read a feature collection
pub fn read_feature_collection<P: AsRef<Path>>(path: P) -> Result<FeatureCollection> {
    let path = path.as_ref();
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") | Some("geojson") => GeoJson::read_feature_collection(path),
        _ => Err(Error::InvalidData(format!(
            "Unsupported boundary format: {:?}",
            path.extension()
        ))),
    }
}

/// Auto-detect format and write a feature collection
pub fn write_feature_collection<P: AsRef<Path>>(collection: &FeatureCollection, path: P) -> Result<()> {
    let path = path.as_ref();
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") | Some("geojson") => GeoJson::write_feature_collection(collection, path),
        _ => Err(Error::InvalidData(format!(
            "Unsupported boundary format: {:?}",
            path.extension()
        ))),
    }
}
