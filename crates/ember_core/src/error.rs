//! # Ember Error Types
//!
//! Every error here is a configuration error. Once an emitter has been
//! built, ticking cannot fail.

use thiserror::Error;

/// Errors that can occur while building or loading an emitter configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmberError {
    /// Buffer capacity must hold at least one particle.
    #[error("invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    /// Emission period must be non-zero.
    #[error("invalid period: emission period must be greater than zero")]
    InvalidPeriod,

    /// A spawn range has non-finite bounds or `min > max`.
    #[error("invalid {field} range: [{min}, {max}]")]
    InvalidRange {
        /// Which particle field the range drives.
        field: &'static str,
        /// Lower bound as configured.
        min: f32,
        /// Upper bound as configured.
        max: f32,
    },

    /// Configuration text is not valid TOML for an emitter.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),

    /// Configuration file could not be read.
    #[error("failed to read configuration {path}: {reason}")]
    ConfigIo {
        /// Path that was requested.
        path: String,
        /// Underlying IO error text.
        reason: String,
    },

    /// The OS refused to spawn the emitter's timer thread.
    #[error("failed to spawn timer thread: {0}")]
    TimerSpawn(String),
}

/// Result type for ember operations.
pub type EmberResult<T> = Result<T, EmberError>;
