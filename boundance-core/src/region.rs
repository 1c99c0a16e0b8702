//! Named regions and their canonical boundaries

use crate::feature::FeatureCollection;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a region, e.g. a US state postal code
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(String);

impl RegionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RegionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for RegionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RegionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The 50 US states, in the order they are drawn
pub const US_STATES: [&str; 50] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL",
    "IN", "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT",
    "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI",
    "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV", "WI", "WY",
];

/// A region together with its canonical boundary features
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: RegionId,
    pub features: FeatureCollection,
}

impl Region {
    /// Create a region, checking that every feature is polygonal
    pub fn new(id: impl Into<RegionId>, features: FeatureCollection) -> Result<Self> {
        features.ensure_polygonal()?;
        Ok(Self { id: id.into(), features })
    }

    /// Total number of boundary positions
    pub fn vertex_count(&self) -> usize {
        self.features.vertex_count()
    }
}
