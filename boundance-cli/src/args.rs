//! Command-line arguments

use anyhow::{Context, Result};
use boundance_core::{AnimationConfig, RegionId, Thinning, US_STATES};
use clap::Parser;
use std::path::PathBuf;

/// Redraw randomly thinned US state boundaries as a sequence of SVG frames
#[derive(Parser, Debug)]
#[command(name = "boundance", version, about)]
pub struct Args {
    /// Directory holding one `<ID>.geo.json` file per region
    #[arg(long)]
    pub assets: PathBuf,

    /// Directory the SVG frames are written to
    #[arg(long, default_value = "frames")]
    pub out: PathBuf,

    /// JSON settings file; flags given here override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Probability that an interior vertex survives a tick
    #[arg(long, conflicts_with = "stride")]
    pub retention: Option<f64>,

    /// Keep every N-th vertex instead of thinning at random
    #[arg(long)]
    pub stride: Option<usize>,

    /// Milliseconds between ticks
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// Multi-polygon holes with this many vertices or fewer are dropped
    #[arg(long)]
    pub min_hole_vertices: Option<usize>,

    /// Stop after this many ticks instead of running until Ctrl-C
    #[arg(long)]
    pub ticks: Option<u64>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Comma-separated region ids to draw; all 50 states by default
    #[arg(long, value_delimiter = ',')]
    pub regions: Vec<String>,
}

impl Args {
    /// Settings from the config file, if any, with flags applied on top
    pub fn animation_config(&self) -> Result<AnimationConfig> {
        let mut config = match &self.config {
            Some(path) => AnimationConfig::from_json_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => AnimationConfig::default(),
        };

        if let Some(retention) = self.retention {
            config.reduction.thinning = Thinning::Random { retention };
        }
        if let Some(step) = self.stride {
            config.reduction.thinning = Thinning::Stride { step };
        }
        if let Some(min) = self.min_hole_vertices {
            config.reduction.min_hole_vertices = min;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }
        if self.ticks.is_some() {
            config.max_ticks = self.ticks;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate().context("invalid settings")?;
        Ok(config)
    }

    /// Regions to load, upper-cased, in drawing order
    pub fn region_ids(&self) -> Vec<RegionId> {
        if self.regions.is_empty() {
            US_STATES.iter().map(|&id| RegionId::from(id)).collect()
        } else {
            self.regions
                .iter()
                .map(|id| id.trim().to_ascii_uppercase())
                .filter(|id| !id.is_empty())
                .map(RegionId::from)
                .collect()
        }
    }
}
