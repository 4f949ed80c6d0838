//! # EMBER Emitter
//!
//! Drives an [`ember_core::EmitterState`] from an owned, cancellable timer.
//!
//! ## Thread Safety
//!
//! Ticks run on a single timer thread per emitter, so they never overlap.
//! Readers on any thread get consistent snapshots through
//! [`Emitter::current_particles`]. Renderers subscribe instead of polling.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ember_core::EmitterConfig;
//! use ember_emitter::{Emitter, EmitterEvent};
//!
//! let emitter = Emitter::new(EmitterConfig::default())?;
//! emitter.subscribe(|event| {
//!     if let EmitterEvent::Emitted { particle, evicted, .. } = event {
//!         // create an element for `particle`, remove the one for `evicted`
//!         let _ = (particle, evicted);
//!     }
//! });
//!
//! emitter.start()?;
//! std::thread::sleep(std::time::Duration::from_secs(1));
//! emitter.stop();
//! # Ok::<(), ember_core::EmberError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod emitter;
pub mod event;
pub mod listener;
mod timer;

pub use emitter::{Emitter, EmitterStats};
pub use event::EmitterEvent;
pub use listener::{Listener, ListenerId};
