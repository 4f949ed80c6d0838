//! # Particle Emitter
//!
//! Owns an [`EmitterState`] and advances it on a fixed period.
//!
//! ## Lifecycle
//!
//! ```text
//!   Stopped ──start()──> Running ──stop()/drop──> Stopped
//! ```
//!
//! - `start()` opens a fresh lifecycle with an empty buffer.
//! - Every tick emits one particle, evicts the oldest past capacity, then
//!   notifies listeners with [`EmitterEvent::Emitted`].
//! - `stop()` cancels the timer, waits out any in-flight tick, drops the
//!   buffer and notifies listeners with [`EmitterEvent::Cleared`]. Until
//!   that completes the emitter is `Stopping` and `start()` is ignored.
//!
//! `start()` and `stop()` are expected to be called by the owner; a listener
//! may also call `stop()` on its own emitter. A panicking listener is logged
//! and skipped; the timer keeps running.

use parking_lot::Mutex;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use ember_core::{EmberResult, EmitterConfig, EmitterState, Particle};

use crate::event::EmitterEvent;
use crate::listener::{Listener, ListenerId, ListenerRegistry};
use crate::timer::TimerHandle;

/// Counters for an emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmitterStats {
    /// Ticks performed across all lifecycles.
    pub ticks: u64,
    /// Particles evicted by capacity across all lifecycles.
    pub evicted: u64,
    /// Times `start()` actually started the timer.
    pub lifecycles: u64,
}

/// State shared with the timer thread.
struct Shared {
    state: Mutex<EmitterState>,
    listeners: Mutex<ListenerRegistry>,
    lifecycles: AtomicU64,
}

impl Shared {
    fn tick(&self) {
        let outcome = self.state.lock().tick();

        tracing::debug!(
            "Emitted particle #{} ({}), buffer {}{}",
            outcome.emitted.sequence,
            outcome.emitted.id,
            outcome.len,
            if outcome.evicted.is_some() { ", evicted oldest" } else { "" }
        );

        self.notify(&EmitterEvent::Emitted {
            particle: outcome.emitted,
            evicted: outcome.evicted,
            len: outcome.len,
        });
    }

    fn notify(&self, event: &EmitterEvent) {
        let listeners = self.listeners.lock().snapshot();
        tracing::trace!("Dispatching {event:?} to {} listeners", listeners.len());
        for listener in listeners {
            if panic::catch_unwind(AssertUnwindSafe(|| listener(event))).is_err() {
                tracing::error!("Listener panicked while handling {event:?}");
            }
        }
    }
}

/// Timer ownership across a lifecycle.
enum TimerSlot {
    Idle,
    Running(TimerHandle),
    /// `stop()` owns the handle and has not finished clearing.
    Stopping,
}

/// Fixed-period ember emitter.
pub struct Emitter {
    config: EmitterConfig,
    shared: Arc<Shared>,
    timer: Mutex<TimerSlot>,
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("period_ms", &self.config.period_ms)
            .field("capacity", &self.config.capacity)
            .field("running", &self.is_running())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl Emitter {
    /// Builds a stopped emitter.
    ///
    /// # Errors
    ///
    /// Returns the configuration error if `config` is invalid: zero
    /// capacity, zero period, or a malformed range.
    pub fn new(config: EmitterConfig) -> EmberResult<Self> {
        let state = EmitterState::new(&config)?;
        Ok(Self {
            config,
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                listeners: Mutex::new(ListenerRegistry::default()),
                lifecycles: AtomicU64::new(0),
            }),
            timer: Mutex::new(TimerSlot::Idle),
        })
    }

    /// Starts emitting one particle per period. No-op if already running
    /// or while a `stop()` is still in progress.
    ///
    /// # Errors
    ///
    /// Returns [`EmberError::TimerSpawn`](ember_core::EmberError::TimerSpawn)
    /// if the timer thread cannot be spawned.
    pub fn start(&self) -> EmberResult<()> {
        let mut timer = self.timer.lock();
        match *timer {
            TimerSlot::Idle => {}
            TimerSlot::Running(_) => {
                tracing::debug!("Emitter already running, start ignored");
                return Ok(());
            }
            TimerSlot::Stopping => {
                tracing::debug!("Emitter is stopping, start ignored");
                return Ok(());
            }
        }

        self.shared.state.lock().reset();
        let lifecycle = self.shared.lifecycles.load(Ordering::SeqCst) + 1;

        let shared = Arc::clone(&self.shared);
        *timer = TimerSlot::Running(TimerHandle::spawn(
            format!("ember-emitter-{lifecycle}"),
            self.config.period(),
            move || shared.tick(),
        )?);
        self.shared.lifecycles.store(lifecycle, Ordering::SeqCst);

        tracing::info!(
            "Emitter started: period={}ms capacity={} lifecycle={}",
            self.config.period_ms,
            self.config.capacity,
            lifecycle
        );
        Ok(())
    }

    /// Cancels the timer and drops the buffer. No-op if not running.
    ///
    /// Once this returns no further tick runs.
    pub fn stop(&self) {
        // Released before cancelling: a listener may be calling stop() too.
        let timer = {
            let mut slot = self.timer.lock();
            match std::mem::replace(&mut *slot, TimerSlot::Stopping) {
                TimerSlot::Running(timer) => timer,
                other => {
                    *slot = other;
                    return;
                }
            }
        };
        timer.cancel();

        let dropped = self.shared.state.lock().reset();
        tracing::info!("Emitter stopped, dropped {dropped} particles");
        self.shared.notify(&EmitterEvent::Cleared { dropped });
        *self.timer.lock() = TimerSlot::Idle;
    }

    /// Returns true between `start()` and `stop()`.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(*self.timer.lock(), TimerSlot::Running(_))
    }

    /// Snapshot of the live particles, oldest first.
    #[must_use]
    pub fn current_particles(&self) -> Vec<Particle> {
        self.shared.state.lock().particles()
    }

    /// Number of live particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.state.lock().buffer().len()
    }

    /// Returns true if no particles are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum live particles.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// The configuration this emitter was built with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Registers a listener for buffer changes.
    ///
    /// `Emitted` events arrive on the timer thread; `Cleared` arrives on the
    /// thread that called `stop()`. Listeners run after the buffer lock is
    /// released, so they may read the emitter. A panic inside a listener is
    /// caught and logged; other listeners and later ticks still run.
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&EmitterEvent) + Send + Sync + 'static,
    {
        let listener: Listener = Arc::new(listener);
        let mut listeners = self.shared.listeners.lock();
        let id = listeners.insert(listener);
        tracing::trace!("Listener {id:?} subscribed ({} total)", listeners.len());
        id
    }

    /// Removes a listener. Returns false if `id` was not registered.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.shared.listeners.lock().remove(id)
    }

    /// Current counters.
    #[must_use]
    pub fn stats(&self) -> EmitterStats {
        let state = self.shared.state.lock();
        EmitterStats {
            ticks: state.total_ticks(),
            evicted: state.total_evicted(),
            lifecycles: self.shared.lifecycles.load(Ordering::SeqCst),
        }
    }
}

impl Drop for Emitter {
    fn drop(&mut self) {
        self.stop();
    }
}
