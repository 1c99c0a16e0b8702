//! Core data structures and traits for boundance
//!
//! This crate provides the fundamental types shared by the reduction engine,
//! the region store and the animation driver: GeoJSON positions, geometries
//! and features, named regions, configuration and the error type.

pub mod position;
pub mod geometry;
pub mod feature;
pub mod region;
pub mod config;
pub mod traits;
pub mod error;

pub use position::*;
pub use geometry::*;
pub use feature::*;
pub use region::*;
pub use config::*;
pub use traits::*;
pub use error::*;
