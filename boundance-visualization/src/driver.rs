//! The animation loop
//!
//! Every tick fetches a fresh copy of each region from the geometry source,
//! reduces it and hands it to the render sink. A region that fails is logged
//! and skipped; the rest of the tick carries on.

use crate::sink::RenderSink;
use boundance_core::{AnimationConfig, Error, GeometrySource, RegionId, Result};
use boundance_simplification::{BoundaryReducer, GeometrySimplifier};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// A region that could not be drawn during a tick
#[derive(Debug)]
pub struct RegionFailure {
    pub region: RegionId,
    pub error: Error,
}

/// Outcome of a single tick
#[derive(Debug)]
pub struct TickReport {
    pub tick: u64,
    pub rendered: Vec<RegionId>,
    pub failed: Vec<RegionFailure>,
}

impl TickReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Totals over a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub rendered: u64,
    pub failed: u64,
    pub interrupted: bool,
}

impl RunSummary {
    fn absorb(&mut self, report: &TickReport) {
        self.ticks += 1;
        self.rendered += report.rendered.len() as u64;
        self.failed += report.failed.len() as u64;
    }
}

/// Drives the reduce-and-render cycle at a fixed period
pub struct AnimationDriver<S, K, G = BoundaryReducer> {
    source: S,
    sink: K,
    simplifier: G,
    config: AnimationConfig,
    rng: StdRng,
    next_tick: u64,
}

impl<S, K> AnimationDriver<S, K, BoundaryReducer>
where
    S: GeometrySource,
    K: RenderSink,
{
    /// Create a driver reducing with the configured [`ReductionConfig`](boundance_core::ReductionConfig)
    pub fn new(source: S, sink: K, config: AnimationConfig) -> Result<Self> {
        let reducer = BoundaryReducer::new(config.reduction);
        Self::with_simplifier(source, sink, reducer, config)
    }
}

impl<S, K, G> AnimationDriver<S, K, G>
where
    S: GeometrySource,
    K: RenderSink,
    G: GeometrySimplifier,
{
    pub fn with_simplifier(source: S, sink: K, simplifier: G, config: AnimationConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            source,
            sink,
            simplifier,
            config,
            rng,
            next_tick: 0,
        })
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Number of ticks completed so far
    pub fn ticks_completed(&self) -> u64 {
        self.next_tick
    }

    /// Take the driver apart, returning the geometry source and the sink
    pub fn into_parts(self) -> (S, K) {
        (self.source, self.sink)
    }

    fn draw_region(&mut self, id: &RegionId) -> Result<()> {
        let mut boundary = self.source.canonical_geometry(id)?;
        self.simplifier.simplify_collection(&mut boundary, &mut self.rng)?;
        debug!(region = %id, vertices = boundary.vertex_count(), "region reduced");
        self.sink.render(id, &boundary)
    }

    /// Run one tick synchronously.
    ///
    /// Errors from individual regions are collected into the report; only a
    /// failure of the sink to open or close the frame aborts the tick.
    pub fn tick(&mut self) -> Result<TickReport> {
        let tick = self.next_tick;
        let mut report = TickReport { tick, rendered: Vec::new(), failed: Vec::new() };

        self.sink.begin_tick(tick)?;
        for id in self.source.region_ids() {
            match self.draw_region(&id) {
                Ok(()) => report.rendered.push(id),
                Err(error) => {
                    warn!(region = %id, tick, %error, "skipping region for this tick");
                    report.failed.push(RegionFailure { region: id, error });
                }
            }
        }
        self.sink.end_tick(tick)?;

        self.next_tick += 1;
        Ok(report)
    }

    /// Tick at the configured period until `max_ticks` is reached or Ctrl-C
    /// is received.
    ///
    /// Ticks never overlap: a tick that overruns the period delays the next
    /// one instead of queueing extra ticks.
    pub async fn run(&mut self) -> Result<RunSummary> {
        let period = self.config.tick_period();
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        let mut summary = RunSummary::default();
        info!(period_ms = period.as_millis() as u64, max_ticks = ?self.config.max_ticks, "animation started");

        loop {
            if self.config.max_ticks.is_some_and(|max| summary.ticks >= max) {
                break;
            }
            tokio::select! {
                _ = interval.tick() => {
                    let report = self.tick()?;
                    summary.absorb(&report);
                }
                result = &mut shutdown => {
                    result?;
                    summary.interrupted = true;
                    break;
                }
            }
        }

        info!(
            ticks = summary.ticks,
            rendered = summary.rendered,
            failed = summary.failed,
            interrupted = summary.interrupted,
            "animation stopped"
        );
        Ok(summary)
    }
}
