//! # EMBER Core
//!
//! Particle model and bounded buffer for a torch ember effect.
//!
//! ## Design Principles
//!
//! 1. **Bounded** - The buffer never holds more than its capacity
//! 2. **Strict FIFO** - The oldest ember is evicted first, whatever its remaining lifetime
//! 3. **Fail fast** - Bad capacity, period or ranges are rejected at construction
//! 4. **Total ticks** - Once built, a tick cannot fail
//!
//! ## Example
//!
//! ```rust
//! use ember_core::{EmitterConfig, EmitterState};
//!
//! let config = EmitterConfig::default().with_capacity(3).with_seed(7);
//! let mut state = EmitterState::new(&config)?;
//!
//! for _ in 0..5 {
//!     state.tick();
//! }
//!
//! let sequences: Vec<u64> = state.buffer().iter().map(|p| p.sequence).collect();
//! assert_eq!(sequences, vec![3, 4, 5]);
//! # Ok::<(), ember_core::EmberError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod buffer;
pub mod config;
pub mod constants;
pub mod error;
pub mod particle;
pub mod sampler;
pub mod state;

pub use buffer::ParticleBuffer;
pub use config::EmitterConfig;
pub use error::{EmberError, EmberResult};
pub use particle::{Particle, ParticleId, SpawnRange, SpawnRanges};
pub use sampler::ParticleSampler;
pub use state::{EmitterState, TickOutcome};
