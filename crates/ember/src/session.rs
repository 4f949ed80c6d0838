//! # Timed Sessions
//!
//! Runs an emitter for a wall-clock window while tracking what a renderer
//! would see, then tears it down.

use parking_lot::Mutex;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use ember_core::{EmberResult, EmitterConfig, Particle};
use ember_emitter::{Emitter, EmitterEvent, EmitterStats};

/// What happened during a session.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSummary {
    /// Emitter counters at the end of the session.
    pub stats: EmitterStats,
    /// Largest buffer length observed.
    pub peak_len: usize,
    /// Buffer contents just before teardown, oldest first.
    pub final_particles: Vec<Particle>,
}

#[derive(Default)]
struct Tracker {
    peak_len: usize,
}

/// Starts an emitter built from `config`, lets it run for `duration`, stops it.
///
/// `on_event` sees every event the emitter publishes, including the final
/// `Cleared`.
///
/// # Errors
///
/// Returns the configuration error if `config` is invalid, or a timer spawn
/// failure.
pub fn run_session<F>(config: EmitterConfig, duration: Duration, on_event: F) -> EmberResult<SessionSummary>
where
    F: Fn(&EmitterEvent) + Send + Sync + 'static,
{
    let emitter = Emitter::new(config)?;

    let tracker = Arc::new(Mutex::new(Tracker::default()));
    let sink = Arc::clone(&tracker);
    emitter.subscribe(move |event| {
        if let EmitterEvent::Emitted { len, .. } = event {
            let mut tracker = sink.lock();
            tracker.peak_len = tracker.peak_len.max(*len);
        }
        on_event(event);
    });

    emitter.start()?;
    thread::sleep(duration);

    let final_particles = emitter.current_particles();
    emitter.stop();

    let peak_len = tracker.lock().peak_len;
    Ok(SessionSummary {
        stats: emitter.stats(),
        peak_len,
        final_particles,
    })
}
