//! # EMBER
//!
//! Torch ember particles, integrating the core model and the timed emitter.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                          EMBER                           │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌─────────────────┐   ticks   ┌──────────────────────┐  │
//! │  │  ember_emitter  │──────────>│     ember_core       │  │
//! │  │                 │           │                      │  │
//! │  │  • Timer thread │           │  • Particle / ranges │  │
//! │  │  • start / stop │           │  • FIFO buffer       │  │
//! │  │  • Listeners    │           │  • Sampler / config  │  │
//! │  └────────┬────────┘           └──────────────────────┘  │
//! │           │ EmitterEvent                                 │
//! │           ▼                                              │
//! │     external renderer                                    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `session`: run an emitter for a fixed wall-clock window and summarize it

pub mod session;

// Re-export the layers
pub use ember_core as core;
pub use ember_emitter as emitter;

// Re-export commonly used types
pub use ember_core::{EmberError, EmberResult, EmitterConfig, Particle, SpawnRange, SpawnRanges};
pub use ember_emitter::{Emitter, EmitterEvent, EmitterStats, ListenerId};
pub use session::{run_session, SessionSummary};
