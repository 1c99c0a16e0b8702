//! Reduction and animation settings

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Probability that an interior vertex survives a random reduction
pub const DEFAULT_RETENTION: f64 = 0.75;

/// Period between animation ticks, in milliseconds
pub const DEFAULT_TICK_MS: u64 = 100;

/// Hole rings with this many vertices or fewer are dropped from multi-polygons
pub const DEFAULT_MIN_HOLE_VERTICES: usize = 6;

/// How interior vertices of a ring are chosen for survival
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Thinning {
    /// Keep each interior vertex independently with probability `retention`.
    ///
    /// Retention above 1 keeps every vertex; at or below 0 only the
    /// endpoints survive.
    Random { retention: f64 },
    /// Keep every `step`-th vertex, counting from the first
    Stride { step: usize },
}

impl Default for Thinning {
    fn default() -> Self {
        Thinning::Random { retention: DEFAULT_RETENTION }
    }
}

/// Parameters for one geometry reduction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReductionConfig {
    pub thinning: Thinning,
    pub min_hole_vertices: usize,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            thinning: Thinning::default(),
            min_hole_vertices: DEFAULT_MIN_HOLE_VERTICES,
        }
    }
}

impl ReductionConfig {
    /// Random thinning with the given retention and the default hole threshold
    pub fn random(retention: f64) -> Self {
        Self { thinning: Thinning::Random { retention }, ..Self::default() }
    }

    /// Stride thinning with the given step and the default hole threshold
    pub fn stride(step: usize) -> Self {
        Self { thinning: Thinning::Stride { step }, ..Self::default() }
    }

    pub fn validate(&self) -> Result<()> {
        match self.thinning {
            Thinning::Random { retention } if retention.is_nan() => Err(Error::InvalidConfig(
                "retention must be a number".to_string(),
            )),
            Thinning::Stride { step: 0 } => Err(Error::InvalidConfig(
                "stride step must be at least 1".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

/// Settings for the animation loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub tick_ms: u64,
    /// Stop after this many ticks; run until interrupted when unset
    pub max_ticks: Option<u64>,
    /// Seed for the random source; drawn from entropy when unset
    pub seed: Option<u64>,
    pub reduction: ReductionConfig,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            max_ticks: None,
            seed: None,
            reduction: ReductionConfig::default(),
        }
    }
}

impl AnimationConfig {
    /// Load settings from a JSON file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_ms == 0 {
            return Err(Error::InvalidConfig("tick period must be positive".to_string()));
        }
        self.reduction.validate()
    }
}
