//! GeoJSON features and feature collections

use crate::geometry::Geometry;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
enum FeatureTag {
    #[default]
    Feature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
enum FeatureCollectionTag {
    #[default]
    FeatureCollection,
}

/// A GeoJSON feature: one geometry plus opaque properties.
///
/// Everything other than the geometry is carried through untouched,
/// including members GeoJSON does not define. The one exception is a missing
/// `properties` member, which is written back as `"properties": null`, the
/// form GeoJSON requires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    tag: FeatureTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Vec<f64>>,
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub foreign_members: Map<String, Value>,
}

impl Feature {
    /// Create a feature with no properties
    pub fn new(geometry: Geometry) -> Self {
        Self {
            tag: FeatureTag::Feature,
            id: None,
            bbox: None,
            geometry,
            properties: None,
            foreign_members: Map::new(),
        }
    }

    /// Attach properties to the feature
    pub fn with_properties(mut self, properties: Map<String, Value>) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Look up a property value by name
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.as_ref().and_then(|p| p.get(name))
    }
}

/// A GeoJSON feature collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    tag: FeatureCollectionTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Vec<f64>>,
    pub features: Vec<Feature>,
    #[serde(flatten)]
    pub foreign_members: Map<String, Value>,
}

impl FeatureCollection {
    /// Create a collection from a list of features
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            tag: FeatureCollectionTag::FeatureCollection,
            bbox: None,
            features,
            foreign_members: Map::new(),
        }
    }

    /// Number of features in the collection
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Check if the collection has no features
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Iterate over the features
    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    /// Iterate mutably over the features
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Feature> {
        self.features.iter_mut()
    }

    /// Total number of polygon ring positions across all features
    pub fn vertex_count(&self) -> usize {
        self.features.iter().map(|f| f.geometry.vertex_count()).sum()
    }

    /// Fail with [`Error::UnsupportedGeometry`] on the first feature whose
    /// geometry is not a polygon or multi-polygon
    pub fn ensure_polygonal(&self) -> Result<()> {
        match self.features.iter().map(|f| f.geometry.kind()).find(|k| !k.is_polygonal()) {
            Some(kind) => Err(Error::UnsupportedGeometry(kind)),
            None => Ok(()),
        }
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}
