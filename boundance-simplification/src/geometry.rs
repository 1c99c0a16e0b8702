//! Geometry reduction
//!
//! Applies ring thinning across a whole polygon or multi-polygon. For
//! multi-polygons, holes that end up with too few vertices to read as a
//! cutout are removed after thinning. Plain polygons keep all their rings.

use crate::ring::thin_ring;
use crate::ring_set::filter_holes;
use boundance_core::{Error, FeatureCollection, Geometry, ReductionConfig, Result, Ring, RingSet};
use rand::Rng;

fn thin_ring_set<R: Rng + ?Sized>(rings: &[Ring], config: &ReductionConfig, rng: &mut R) -> RingSet {
    rings.iter().map(|ring| thin_ring(ring, config.thinning, rng)).collect()
}

/// Reduce a geometry in place.
///
/// The rings of `geometry` are replaced with their thinned versions, so pass
/// a copy when the original must survive. Geometries other than polygons and
/// multi-polygons fail with [`Error::UnsupportedGeometry`] and are left
/// untouched.
pub fn reduce_geometry<R: Rng + ?Sized>(
    geometry: &mut Geometry,
    config: &ReductionConfig,
    rng: &mut R,
) -> Result<()> {
    match geometry {
        Geometry::Polygon { coordinates, .. } => {
            for ring in coordinates.iter_mut() {
                *ring = thin_ring(ring, config.thinning, rng);
            }
            Ok(())
        }
        Geometry::MultiPolygon { coordinates, .. } => {
            for ring_set in coordinates.iter_mut() {
                for ring in ring_set.iter_mut() {
                    *ring = thin_ring(ring, config.thinning, rng);
                }
                filter_holes(ring_set, config.min_hole_vertices);
            }
            Ok(())
        }
        Geometry::Point { .. }
        | Geometry::MultiPoint { .. }
        | Geometry::LineString { .. }
        | Geometry::MultiLineString { .. }
        | Geometry::GeometryCollection { .. } => Err(Error::UnsupportedGeometry(geometry.kind())),
    }
}

/// Reduce a geometry into a new value, leaving the input as it was
pub fn reduced_geometry<R: Rng + ?Sized>(
    geometry: &Geometry,
    config: &ReductionConfig,
    rng: &mut R,
) -> Result<Geometry> {
    match geometry {
        Geometry::Polygon {
            coordinates,
            bbox,
            foreign_members,
        } => Ok(Geometry::Polygon {
            coordinates: thin_ring_set(coordinates, config, rng),
            bbox: bbox.clone(),
            foreign_members: foreign_members.clone(),
        }),
        Geometry::MultiPolygon {
            coordinates,
            bbox,
            foreign_members,
        } => Ok(Geometry::MultiPolygon {
            coordinates: coordinates
                .iter()
                .map(|rings| {
                    let mut ring_set = thin_ring_set(rings, config, rng);
                    filter_holes(&mut ring_set, config.min_hole_vertices);
                    ring_set
                })
                .collect(),
            bbox: bbox.clone(),
            foreign_members: foreign_members.clone(),
        }),
        Geometry::Point { .. }
        | Geometry::MultiPoint { .. }
        | Geometry::LineString { .. }
        | Geometry::MultiLineString { .. }
        | Geometry::GeometryCollection { .. } => Err(Error::UnsupportedGeometry(geometry.kind())),
    }
}

/// Reduce every feature of a collection in place.
///
/// The collection is checked up front, so a single unsupported feature fails
/// the whole call before anything is modified.
pub fn reduce_feature_collection<R: Rng + ?Sized>(
    collection: &mut FeatureCollection,
    config: &ReductionConfig,
    rng: &mut R,
) -> Result<()> {
    collection.ensure_polygonal()?;
    for feature in collection.iter_mut() {
        reduce_geometry(&mut feature.geometry, config, rng)?;
    }
    Ok(())
}
