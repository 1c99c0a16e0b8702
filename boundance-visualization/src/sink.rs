//! Render sinks consuming reduced region boundaries

use crate::palette::Palette;
use crate::projection::{AlbersProjection, Projection};
use crate::svg::{collection_path, SvgDocument};
use boundance_core::{Error, FeatureCollection, RegionId, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Receives the reduced boundaries produced by each animation tick
pub trait RenderSink {
    /// Called before the first region of a tick
    fn begin_tick(&mut self, _tick: u64) -> Result<()> {
        Ok(())
    }

    /// Draw one region's reduced boundary
    fn render(&mut self, region: &RegionId, boundary: &FeatureCollection) -> Result<()>;

    /// Called after the last region of a tick
    fn end_tick(&mut self, _tick: u64) -> Result<()> {
        Ok(())
    }
}

/// Keeps the most recent frame in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    current: Vec<(RegionId, FeatureCollection)>,
    last_frame: Vec<(RegionId, FeatureCollection)>,
    completed_ticks: u64,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Regions of the last completed tick, in drawing order
    pub fn last_frame(&self) -> &[(RegionId, FeatureCollection)] {
        &self.last_frame
    }

    /// Boundary drawn for a region in the last completed tick
    pub fn boundary(&self, id: &str) -> Option<&FeatureCollection> {
        self.last_frame
            .iter()
            .find(|(region, _)| region.as_str() == id)
            .map(|(_, boundary)| boundary)
    }

    pub fn completed_ticks(&self) -> u64 {
        self.completed_ticks
    }
}

impl RenderSink for MemorySink {
    fn begin_tick(&mut self, _tick: u64) -> Result<()> {
        self.current.clear();
        Ok(())
    }

    fn render(&mut self, region: &RegionId, boundary: &FeatureCollection) -> Result<()> {
        self.current.push((region.clone(), boundary.clone()));
        Ok(())
    }

    fn end_tick(&mut self, _tick: u64) -> Result<()> {
        self.last_frame = std::mem::take(&mut self.current);
        self.completed_ticks += 1;
        Ok(())
    }
}

/// Writes one SVG document per tick into a directory.
///
/// Each region gets a random palette color the first time it is drawn and
/// keeps it for the rest of the animation.
pub struct SvgFrameSink<P: Projection = AlbersProjection> {
    out_dir: PathBuf,
    projection: P,
    palette: Palette,
    width: u32,
    height: u32,
    colors: HashMap<RegionId, String>,
    rng: StdRng,
    document: Option<SvgDocument>,
    frames_written: u64,
}

impl SvgFrameSink<AlbersProjection> {
    /// Create a sink drawing the US Albers frame at 960×600, creating
    /// `out_dir` if needed
    pub fn new<D: AsRef<Path>>(out_dir: D) -> Result<Self> {
        Self::with_projection(out_dir, AlbersProjection::default(), 960, 600)
    }
}

impl<P: Projection> SvgFrameSink<P> {
    pub fn with_projection<D: AsRef<Path>>(out_dir: D, projection: P, width: u32, height: u32) -> Result<Self> {
        let out_dir = out_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&out_dir)?;
        Ok(Self {
            out_dir,
            projection,
            palette: Palette::default(),
            width,
            height,
            colors: HashMap::new(),
            rng: StdRng::from_entropy(),
            document: None,
            frames_written: 0,
        })
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Make color assignment reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Path of the frame file written for a tick
    pub fn frame_path(&self, tick: u64) -> PathBuf {
        self.out_dir.join(format!("frame_{:05}.svg", tick))
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Stroke color assigned to a region, if it has been drawn
    pub fn color_of(&self, id: &RegionId) -> Option<&str> {
        self.colors.get(id).map(String::as_str)
    }
}

impl<P: Projection> RenderSink for SvgFrameSink<P> {
    fn begin_tick(&mut self, _tick: u64) -> Result<()> {
        self.document = Some(SvgDocument::new(self.width, self.height));
        Ok(())
    }

    fn render(&mut self, region: &RegionId, boundary: &FeatureCollection) -> Result<()> {
        let document = self
            .document
            .as_mut()
            .ok_or_else(|| Error::Render("render called outside of a tick".to_string()))?;

        let palette = &self.palette;
        let rng = &mut self.rng;
        let color = self
            .colors
            .entry(region.clone())
            .or_insert_with(|| palette.pick(rng).to_string());

        let path_data = collection_path(boundary, &self.projection);
        document.add_region(region, color, &path_data);
        Ok(())
    }

    fn end_tick(&mut self, tick: u64) -> Result<()> {
        let document = self
            .document
            .take()
            .ok_or_else(|| Error::Render("end_tick called without begin_tick".to_string()))?;
        let path = self.frame_path(tick);
        std::fs::write(&path, document.finish())?;
        self.frames_written += 1;
        debug!(path = %path.display(), regions = document.region_count(), "frame written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boundance_core::{Feature, Geometry, Position};

    fn boundary(offset: f64) -> FeatureCollection {
        FeatureCollection::new(vec![Feature::new(Geometry::polygon(vec![vec![
            Position::new(-100.0 + offset, 40.0),
            Position::new(-99.0 + offset, 40.0),
            Position::new(-99.0 + offset, 41.0),
            Position::new(-100.0 + offset, 40.0),
        ]]))])
    }

    #[test]
    fn test_memory_sink_keeps_last_complete_frame() {
        let mut sink = MemorySink::new();
        sink.begin_tick(0).unwrap();
        sink.render(&RegionId::from("AA"), &boundary(0.0)).unwrap();
        sink.end_tick(0).unwrap();

        sink.begin_tick(1).unwrap();
        sink.render(&RegionId::from("BB"), &boundary(1.0)).unwrap();
        assert!(sink.boundary("AA").is_some());

        sink.end_tick(1).unwrap();
        assert!(sink.boundary("AA").is_none());
        assert_eq!(sink.boundary("BB"), Some(&boundary(1.0)));
        assert_eq!(sink.completed_ticks(), 2);
    }

    #[test]
    fn test_svg_sink_writes_frames_with_stable_colors() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = SvgFrameSink::new(dir.path().join("frames")).unwrap().with_seed(5);
        let id = RegionId::from("AA");

        sink.begin_tick(0).unwrap();
        sink.render(&id, &boundary(0.0)).unwrap();
        sink.end_tick(0).unwrap();
        let first_color = sink.color_of(&id).unwrap().to_string();

        sink.begin_tick(1).unwrap();
        sink.render(&id, &boundary(0.5)).unwrap();
        sink.end_tick(1).unwrap();

        assert_eq!(sink.color_of(&id), Some(first_color.as_str()));
        assert_eq!(sink.frames_written(), 2);

        let svg = std::fs::read_to_string(sink.frame_path(1)).unwrap();
        assert!(svg.contains(r#"<g id="AA""#));
        assert!(svg.contains(&format!(r#"stroke="{}""#, first_color)));
        assert!(svg.contains("<path d=\"M"));
    }

    #[test]
    fn test_svg_sink_custom_palette() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = SvgFrameSink::new(dir.path())
            .unwrap()
            .with_palette(Palette::new(["#123456"]));

        sink.begin_tick(0).unwrap();
        sink.render(&RegionId::from("AA"), &boundary(0.0)).unwrap();
        sink.render(&RegionId::from("BB"), &boundary(1.0)).unwrap();
        sink.end_tick(0).unwrap();

        assert_eq!(sink.color_of(&RegionId::from("AA")), Some("#123456"));
        assert_eq!(sink.color_of(&RegionId::from("BB")), Some("#123456"));
        let svg = std::fs::read_to_string(sink.frame_path(0)).unwrap();
        assert_eq!(svg.matches(r##"stroke="#123456""##).count(), 2);
    }

    #[test]
    fn test_svg_sink_render_outside_tick() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = SvgFrameSink::new(dir.path()).unwrap();
        let result = sink.render(&RegionId::from("AA"), &boundary(0.0));
        assert!(matches!(result, Err(Error::Render(_))));
        assert!(matches!(sink.end_tick(0), Err(Error::Render(_))));
    }
}
