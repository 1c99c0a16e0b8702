//! The canonical region store
//!
//! Boundaries are parsed once and then only ever handed out as copies, so a
//! reduction can never reach back into the canonical data.

use crate::geojson::GeoJson;
use crate::FeatureCollectionReader;
use boundance_core::{
    Error, FeatureCollection, GeometrySource, Region, RegionId, Result, US_STATES,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name suffix of region boundary documents
pub const REGION_FILE_SUFFIX: &str = ".geo.json";

/// Owns the unmodified boundaries of every known region
#[derive(Debug, Clone, Default)]
pub struct RegionStore {
    regions: Vec<Region>,
    index: HashMap<RegionId, usize>,
}

impl RegionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of a region's boundary document inside `dir`
    pub fn region_path<P: AsRef<Path>>(dir: P, id: &RegionId) -> PathBuf {
        dir.as_ref().join(format!("{}{}", id, REGION_FILE_SUFFIX))
    }

    /// Load `<dir>/<ID>.geo.json` for every id, in the given order
    pub fn load_dir<P, I>(dir: P, ids: I) -> Result<Self>
    where
        P: AsRef<Path>,
        I: IntoIterator,
        I::Item: Into<RegionId>,
    {
        let dir = dir.as_ref();
        let mut store = Self::new();

        for id in ids {
            let id = id.into();
            let path = Self::region_path(dir, &id);
            let features = GeoJson::read_feature_collection(&path)?;
            let region = Region::new(id, features).map_err(|e| match e {
                Error::UnsupportedGeometry(kind) => Error::InvalidData(format!(
                    "{} contains a {} feature; only Polygon and MultiPolygon are supported",
                    path.display(),
                    kind
                )),
                other => other,
            })?;
            debug!(region = %region.id, vertices = region.vertex_count(), "loaded region");
            store.insert(region);
        }

        info!(regions = store.len(), vertices = store.vertex_count(), dir = %dir.display(), "region store loaded");
        Ok(store)
    }

    /// Load the 50 US states from `dir`
    pub fn load_us_states<P: AsRef<Path>>(dir: P) -> Result<Self> {
        Self::load_dir(dir, US_STATES)
    }

    /// Add a region, replacing any previous region with the same id while
    /// keeping its position in the drawing order
    pub fn insert(&mut self, region: Region) {
        match self.index.get(&region.id) {
            Some(&slot) => self.regions[slot] = region,
            None => {
                self.index.insert(region.id.clone(), self.regions.len());
                self.regions.push(region);
            }
        }
    }

    /// Borrow a region's canonical data
    pub fn get(&self, id: &str) -> Option<&Region> {
        self.index.get(id).map(|&slot| &self.regions[slot])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Iterate over the regions in drawing order
    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    /// Total number of boundary positions across all regions
    pub fn vertex_count(&self) -> usize {
        self.regions.iter().map(Region::vertex_count).sum()
    }
}

impl GeometrySource for RegionStore {
    fn region_ids(&self) -> Vec<RegionId> {
        self.regions.iter().map(|r| r.id.clone()).collect()
    }

    fn canonical_geometry(&self, id: &RegionId) -> Result<FeatureCollection> {
        self.get(id.as_str())
            .map(|region| region.features.clone())
            .ok_or_else(|| Error::UnknownRegion(id.to_string()))
    }
}

impl FromIterator<Region> for RegionStore {
    fn from_iter<I: IntoIterator<Item = Region>>(iter: I) -> Self {
        let mut store = Self::new();
        for region in iter {
            store.insert(region);
        }
        store
    }
}
