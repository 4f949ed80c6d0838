//! # Cancellable Timer
//!
//! A dedicated thread that calls `on_tick` once per period until cancelled.
//!
//! ```text
//!   TimerHandle ── stop_tx ──┐
//!                            ▼
//!   [timer thread]  select { stop_rx -> exit, ticker -> on_tick() }
//! ```
//!
//! Cancelling drops the stop sender, which disconnects `stop_rx` and wakes
//! the thread, then joins it. Ticks never overlap: they all run on this one
//! thread, one after another.

use crossbeam_channel::{bounded, select, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use ember_core::{EmberError, EmberResult};

/// Owned handle to a running timer thread.
///
/// Dropping the handle cancels the timer.
pub(crate) struct TimerHandle {
    stop_tx: Option<Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl TimerHandle {
    /// Spawns a timer thread named `name` firing every `period`.
    pub(crate) fn spawn<F>(name: String, period: Duration, mut on_tick: F) -> EmberResult<Self>
    where
        F: FnMut() + Send + 'static,
    {
        let (stop_tx, stop_rx) = bounded::<()>(0);

        let thread = thread::Builder::new()
            .name(name)
            .spawn(move || {
                let ticker = crossbeam_channel::tick(period);
                loop {
                    select! {
                        recv(stop_rx) -> _ => break,
                        recv(ticker) -> _ => {
                            // Both channels can be ready at once; cancellation wins.
                            if matches!(stop_rx.try_recv(), Err(TryRecvError::Disconnected)) {
                                break;
                            }
                            on_tick();
                        }
                    }
                }
                tracing::trace!("Timer thread exiting");
            })
            .map_err(|e| EmberError::TimerSpawn(e.to_string()))?;

        Ok(Self {
            stop_tx: Some(stop_tx),
            thread: Some(thread),
        })
    }

    /// Stops the timer and waits for an in-flight tick to finish.
    ///
    /// Called from the timer thread itself (a listener stopping its own
    /// emitter), the thread is detached instead of joined.
    pub(crate) fn cancel(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        drop(self.stop_tx.take());

        if let Some(handle) = self.thread.take() {
            if handle.thread().id() == thread::current().id() {
                return;
            }
            if handle.join().is_err() {
                tracing::warn!("Timer thread panicked during a tick");
            }
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}
