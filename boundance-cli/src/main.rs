//! `boundance`: animate randomly thinned region boundaries
//!
//! Loads the region boundaries once, then on every tick reduces a fresh copy
//! of each and writes the frame as an SVG file. Logging honours `RUST_LOG`.

mod args;

use anyhow::{Context, Result};
use args::Args;
use boundance_io::RegionStore;
use boundance_visualization::{AnimationDriver, SvgFrameSink};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    let config = args.animation_config()?;

    let store = RegionStore::load_dir(&args.assets, args.region_ids())
        .with_context(|| format!("failed to load regions from {}", args.assets.display()))?;

    let mut sink = SvgFrameSink::new(&args.out)
        .with_context(|| format!("failed to prepare output directory {}", args.out.display()))?;
    if let Some(seed) = config.seed {
        sink = sink.with_seed(seed);
    }

    let mut driver = AnimationDriver::new(store, sink, config)?;
    let summary = driver.run().await?;

    info!(
        frames = driver.sink().frames_written(),
        out = %args.out.display(),
        "done"
    );
    if summary.failed > 0 {
        warn!(failed = summary.failed, "some regions could not be drawn; see warnings above");
    }
    Ok(())
}
