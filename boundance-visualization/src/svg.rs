//! SVG path data and frame documents

use crate::projection::Projection;
use boundance_core::{FeatureCollection, Geometry, Position, RegionId};
use itertools::Itertools;

/// Path data for a single ring: `M x,y L x,y ... Z`.
///
/// Rings with fewer than two positions produce nothing.
pub fn ring_path<P: Projection + ?Sized>(ring: &[Position], projection: &P) -> Option<String> {
    if ring.len() < 2 {
        return None;
    }
    let segments = ring
        .iter()
        .map(|position| {
            let p = projection.project(position);
            format!("{:.2},{:.2}", p.x, p.y)
        })
        .join("L");
    Some(format!("M{}Z", segments))
}

/// Path data for every ring of a geometry
pub fn geometry_path<P: Projection + ?Sized>(geometry: &Geometry, projection: &P) -> String {
    geometry.rings().filter_map(|ring| ring_path(ring, projection)).join("")
}

/// Path data for every feature of a collection
pub fn collection_path<P: Projection + ?Sized>(collection: &FeatureCollection, projection: &P) -> String {
    collection
        .iter()
        .map(|feature| geometry_path(&feature.geometry, projection))
        .join("")
}

/// Stroke styling shared by every region outline
#[derive(Debug, Clone)]
pub struct StrokeStyle {
    pub width: f64,
    pub linejoin: &'static str,
    pub linecap: &'static str,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self { width: 2.0, linejoin: "round", linecap: "round" }
    }
}

/// Accumulates one frame of region outlines
#[derive(Debug, Clone)]
pub struct SvgDocument {
    width: u32,
    height: u32,
    style: StrokeStyle,
    body: String,
    regions: usize,
}

impl SvgDocument {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_style(width, height, StrokeStyle::default())
    }

    pub fn with_style(width: u32, height: u32, style: StrokeStyle) -> Self {
        Self { width, height, style, body: String::new(), regions: 0 }
    }

    /// Add one region's outline as an unfilled group
    pub fn add_region(&mut self, id: &RegionId, color: &str, path_data: &str) {
        self.body.push_str(&format!(
            r#"  <g id="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linejoin="{}" stroke-linecap="{}">
    <path d="{}" />
  </g>
"#,
            escape_attribute(id.as_str()),
            escape_attribute(color),
            self.style.width,
            self.style.linejoin,
            self.style.linecap,
            path_data
        ));
        self.regions += 1;
    }

    /// Number of regions drawn so far
    pub fn region_count(&self) -> usize {
        self.regions
    }

    /// Render the complete document
    pub fn finish(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">
{body}</svg>
"#,
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
