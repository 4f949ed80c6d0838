//! # Emitter Configuration
//!
//! Loaded once at startup, validated once, then frozen. Every field is
//! optional in TOML and falls back to the torch defaults in
//! [`constants`](crate::constants).
//!
//! ```toml
//! period_ms = 200
//! capacity = 100
//!
//! [ranges.size]
//! min = 4.0
//! max = 12.0
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::constants::{DEFAULT_CAPACITY, DEFAULT_PERIOD_MS};
use crate::error::{EmberError, EmberResult};
use crate::particle::SpawnRanges;

/// Construction-time settings for an emitter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmitterConfig {
    /// Time between ticks, in milliseconds.
    pub period_ms: u64,
    /// Maximum particles retained at once.
    pub capacity: usize,
    /// Ranges the randomized particle fields are drawn from.
    pub ranges: SpawnRanges,
    /// Fixed RNG seed. `None` seeds from OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            period_ms: DEFAULT_PERIOD_MS,
            capacity: DEFAULT_CAPACITY,
            ranges: SpawnRanges::default(),
            seed: None,
        }
    }
}

impl EmitterConfig {
    /// Overrides the buffer capacity.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Overrides the tick period.
    #[must_use]
    pub const fn with_period_ms(mut self, period_ms: u64) -> Self {
        self.period_ms = period_ms;
        self
    }

    /// Pins the RNG seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the spawn ranges.
    #[must_use]
    pub const fn with_ranges(mut self, ranges: SpawnRanges) -> Self {
        self.ranges = ranges;
        self
    }

    /// Tick period as a [`Duration`].
    #[inline]
    #[must_use]
    pub const fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }

    /// Checks capacity, period and every range.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> EmberResult<()> {
        if self.capacity == 0 {
            return Err(EmberError::InvalidCapacity(self.capacity));
        }
        if self.period_ms == 0 {
            return Err(EmberError::InvalidPeriod);
        }
        self.ranges.validate()
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`EmberError::ConfigParse`] for malformed TOML, or a
    /// validation error.
    pub fn from_toml_str(text: &str) -> EmberResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| EmberError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`EmberError::ConfigIo`] if the file cannot be read, otherwise
    /// as [`EmitterConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> EmberResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| EmberError::ConfigIo {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            "Loaded emitter config from {}: period={}ms capacity={}",
            path.display(),
            config.period_ms,
            config.capacity
        );
        Ok(config)
    }
}
