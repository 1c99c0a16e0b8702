//! Visualization and rendering for region boundaries
//!
//! This crate turns reduced boundaries into pictures and drives the
//! animation:
//! - Map projections into screen space
//! - Stroke palettes
//! - SVG path data and frame documents
//! - Render sinks and the fixed-period animation driver

pub mod projection;
pub mod palette;
pub mod svg;
pub mod sink;
pub mod driver;

pub use projection::*;
pub use palette::*;
pub use svg::*;
pub use sink::*;
pub use driver::*;
