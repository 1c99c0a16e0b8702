//! Boundary reduction algorithms
//!
//! This crate thins the vertex lists of polygon boundaries so that each
//! redraw shows a slightly different, still recognisable outline:
//! - Random (Bernoulli) ring thinning and fixed-stride decimation
//! - Removal of holes that became degenerate
//! - Dispatch over polygon and multi-polygon geometries

pub mod ring;
pub mod ring_set;
pub mod geometry;

pub use ring::*;
pub use ring_set::*;
pub use geometry::*;

use boundance_core::{FeatureCollection, Geometry, ReductionConfig, Result};
use rand::Rng;

/// Simplify region boundaries, drawing any randomness from a caller-owned source
pub trait GeometrySimplifier {
    /// Simplify a geometry in place
    fn simplify_in_place<R: Rng + ?Sized>(&self, geometry: &mut Geometry, rng: &mut R) -> Result<()>;

    /// Simplify a geometry into a new value
    fn simplify<R: Rng + ?Sized>(&self, geometry: &Geometry, rng: &mut R) -> Result<Geometry> {
        let mut simplified = geometry.clone();
        self.simplify_in_place(&mut simplified, rng)?;
        Ok(simplified)
    }

    /// Simplify every feature of a collection in place, failing before any
    /// change if one of them cannot be simplified
    fn simplify_collection<R: Rng + ?Sized>(&self, collection: &mut FeatureCollection, rng: &mut R) -> Result<()> {
        collection.ensure_polygonal()?;
        for feature in collection.iter_mut() {
            self.simplify_in_place(&mut feature.geometry, rng)?;
        }
        Ok(())
    }
}

/// Reduces polygon and multi-polygon boundaries according to a [`ReductionConfig`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundaryReducer {
    pub config: ReductionConfig,
}

impl BoundaryReducer {
    pub fn new(config: ReductionConfig) -> Self {
        Self { config }
    }
}

impl GeometrySimplifier for BoundaryReducer {
    fn simplify_in_place<R: Rng + ?Sized>(&self, geometry: &mut Geometry, rng: &mut R) -> Result<()> {
        reduce_geometry(geometry, &self.config, rng)
    }

    fn simplify<R: Rng + ?Sized>(&self, geometry: &Geometry, rng: &mut R) -> Result<Geometry> {
        reduced_geometry(geometry, &self.config, rng)
    }

    fn simplify_collection<R: Rng + ?Sized>(&self, collection: &mut FeatureCollection, rng: &mut R) -> Result<()> {
        reduce_feature_collection(collection, &self.config, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boundance_core::{Feature, Position};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_reducer_from_json_document() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"name": "Square"},
                "geometry": {"type": "Polygon", "coordinates": [[[0,0],[0,1],[1,1],[1,0],[0,0]]]}
            }]
        }"#;
        let mut collection: FeatureCollection = serde_json::from_str(json).unwrap();
        let reducer = BoundaryReducer::new(ReductionConfig::random(0.0));
        let mut rng = StdRng::seed_from_u64(21);

        reducer.simplify_collection(&mut collection, &mut rng).unwrap();
        assert_eq!(
            collection.features[0].geometry,
            Geometry::polygon(vec![vec![Position::new(0.0, 0.0), Position::new(0.0, 0.0)]])
        );
        assert_eq!(collection.features[0].property("name").unwrap(), "Square");
    }

    #[test]
    fn test_simplify_returns_new_value() {
        let ring: Vec<Position> = (0..50).map(|i| Position::new(i as f64, 0.0)).collect();
        let geometry = Geometry::polygon(vec![ring]);
        let reducer = BoundaryReducer::default();
        let mut rng = StdRng::seed_from_u64(22);

        let simplified = reducer.simplify(&geometry, &mut rng).unwrap();
        assert_eq!(geometry.vertex_count(), 50);
        assert!(simplified.vertex_count() < 50);
    }

    #[test]
    fn test_default_trait_methods() {
        struct Collapse;
        impl GeometrySimplifier for Collapse {
            fn simplify_in_place<R: Rng + ?Sized>(&self, geometry: &mut Geometry, rng: &mut R) -> Result<()> {
                reduce_geometry(geometry, &ReductionConfig::random(0.0), rng)
            }
        }

        let ring: Vec<Position> = (0..9).map(|i| Position::new(0.0, i as f64)).collect();
        let mut collection = FeatureCollection::new(vec![Feature::new(Geometry::polygon(vec![ring]))]);
        let mut rng = StdRng::seed_from_u64(23);

        Collapse.simplify_collection(&mut collection, &mut rng).unwrap();
        assert_eq!(collection.vertex_count(), 2);
    }
}
