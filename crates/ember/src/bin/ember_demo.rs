//! # Ember Demo
//!
//! Runs the torch emitter headless and logs what a renderer would receive.
//!
//! ```bash
//! # Defaults: 200ms period, 100 embers, 3 seconds
//! ember_demo
//!
//! # Shipped config, reproducible stream, per-ember logging
//! RUST_LOG=debug ember_demo --config data/ember.toml --seed 7 --seconds 30
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use ember::{run_session, EmberResult, EmitterConfig, EmitterEvent};

/// Headless torch ember emitter.
#[derive(Parser, Debug)]
#[command(name = "ember_demo", version, about)]
struct Cli {
    /// TOML config file. Omitted keys use the torch defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How long to run, in seconds.
    #[arg(short, long, default_value_t = 3.0)]
    seconds: f64,

    /// Override the RNG seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the buffer capacity.
    #[arg(long)]
    capacity: Option<usize>,

    /// Override the tick period in milliseconds.
    #[arg(long)]
    period_ms: Option<u64>,
}

impl Cli {
    fn resolve_config(&self) -> EmberResult<EmitterConfig> {
        let mut config = match &self.config {
            Some(path) => EmitterConfig::load(path)?,
            None => EmitterConfig::default(),
        };
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(capacity) = self.capacity {
            config = config.with_capacity(capacity);
        }
        if let Some(period_ms) = self.period_ms {
            config = config.with_period_ms(period_ms);
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let duration = match Duration::try_from_secs_f64(cli.seconds) {
        Ok(duration) => duration,
        Err(e) => {
            tracing::error!("Invalid --seconds {}: {e}", cli.seconds);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        "Running torch for {:.1}s: period={}ms capacity={} seed={:?}",
        duration.as_secs_f64(),
        config.period_ms,
        config.capacity,
        config.seed
    );

    let result = run_session(config, duration, |event| match event {
        EmitterEvent::Emitted { particle, evicted, len } => {
            tracing::debug!(
                "+ ember {} x={:+.1}% size={:.1}px life={:.2}s (live {len})",
                particle.id,
                particle.horizontal_offset,
                particle.size,
                particle.lifetime
            );
            if let Some(old) = evicted {
                tracing::debug!("- ember {} (#{})", old.id, old.sequence);
            }
        }
        EmitterEvent::Cleared { dropped } => {
            tracing::debug!("Torch extinguished, {dropped} embers removed");
        }
    });

    match result {
        Ok(summary) => {
            tracing::info!(
                "Done: {} ticks, {} evicted, peak {} live, {} live at teardown",
                summary.stats.ticks,
                summary.stats.evicted,
                summary.peak_len,
                summary.final_particles.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Emitter failed: {e}");
            ExitCode::FAILURE
        }
    }
}
