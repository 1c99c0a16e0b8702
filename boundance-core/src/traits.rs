//! Core traits for boundance

use crate::{FeatureCollection, RegionId, Result};

/// A read-only source of canonical region boundaries.
///
/// Every call to [`canonical_geometry`](GeometrySource::canonical_geometry)
/// returns a structurally independent copy, so callers are free to mutate
/// what they get back.
pub trait GeometrySource {
    /// Known region identifiers, in drawing order
    fn region_ids(&self) -> Vec<RegionId>;

    /// A fresh copy of a region's boundary features
    fn canonical_geometry(&self, id: &RegionId) -> Result<FeatureCollection>;
}
