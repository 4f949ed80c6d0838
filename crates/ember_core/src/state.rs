//! # Emitter State
//!
//! The synchronous half of an emitter: buffer, sampler and counters. Each
//! [`EmitterState::tick`] is one generation-and-eviction step. Whoever owns
//! the state decides when ticks happen; `ember_emitter` drives it from a
//! fixed-period timer.

use crate::buffer::ParticleBuffer;
use crate::config::EmitterConfig;
use crate::error::EmberResult;
use crate::particle::{Particle, SpawnRanges};
use crate::sampler::ParticleSampler;

/// What a single tick did to the buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickOutcome {
    /// The particle appended at the back.
    pub emitted: Particle,
    /// The particle removed from the front, if the buffer overflowed.
    pub evicted: Option<Particle>,
    /// Buffer length after the tick.
    pub len: usize,
}

/// Buffer plus random source, advanced one tick at a time.
#[derive(Clone, Debug)]
pub struct EmitterState {
    buffer: ParticleBuffer,
    sampler: ParticleSampler,
    /// Sequence number of the last emitted particle in this lifecycle.
    sequence: u64,
    total_ticks: u64,
    total_evicted: u64,
}

impl EmitterState {
    /// Builds an empty state from a validated copy of `config`.
    ///
    /// # Errors
    ///
    /// Returns the configuration error if `config` fails validation.
    pub fn new(config: &EmitterConfig) -> EmberResult<Self> {
        config.validate()?;
        Ok(Self {
            buffer: ParticleBuffer::with_capacity(config.capacity)?,
            sampler: ParticleSampler::new(config.ranges, config.seed)?,
            sequence: 0,
            total_ticks: 0,
            total_evicted: 0,
        })
    }

    /// Emits one particle and evicts the oldest if over capacity.
    pub fn tick(&mut self) -> TickOutcome {
        self.sequence += 1;
        let emitted = self.sampler.sample(self.sequence);
        let evicted = self.buffer.push(emitted);

        self.total_ticks += 1;
        if evicted.is_some() {
            self.total_evicted += 1;
        }

        TickOutcome {
            emitted,
            evicted,
            len: self.buffer.len(),
        }
    }

    /// Empties the buffer and restarts sequence numbering.
    ///
    /// Lifetime counters survive. Returns how many particles were dropped.
    pub fn reset(&mut self) -> usize {
        self.sequence = 0;
        self.buffer.clear()
    }

    /// The live particles, oldest first.
    #[inline]
    #[must_use]
    pub const fn buffer(&self) -> &ParticleBuffer {
        &self.buffer
    }

    /// Copies the live particles out, oldest first.
    #[must_use]
    pub fn particles(&self) -> Vec<Particle> {
        self.buffer.to_vec()
    }

    /// Ranges particles are drawn from.
    #[inline]
    #[must_use]
    pub const fn ranges(&self) -> &SpawnRanges {
        self.sampler.ranges()
    }

    /// Ticks performed since construction.
    #[inline]
    #[must_use]
    pub const fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Particles evicted since construction.
    #[inline]
    #[must_use]
    pub const fn total_evicted(&self) -> u64 {
        self.total_evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EmberError;

    #[test]
    fn test_new_state_is_empty() {
        let state = EmitterState::new(&EmitterConfig::default().with_seed(3)).unwrap();
        assert!(state.buffer().is_empty());
        assert_eq!(state.buffer().capacity(), 100);
        assert_eq!(state.total_ticks(), 0);
    }

    #[test]
    fn test_new_state_rejects_bad_config() {
        let err = EmitterState::new(&EmitterConfig::default().with_capacity(0)).unwrap_err();
        assert_eq!(err, EmberError::InvalidCapacity(0));
    }

    #[test]
    fn test_tick_reports_outcome() {
        let mut state = EmitterState::new(&EmitterConfig::default().with_capacity(2)).unwrap();

        let first = state.tick();
        assert_eq!(first.emitted.sequence, 1);
        assert!(first.evicted.is_none());
        assert_eq!(first.len, 1);

        state.tick();
        let third = state.tick();
        assert_eq!(third.emitted.sequence, 3);
        assert_eq!(third.evicted.map(|p| p.sequence), Some(1));
        assert_eq!(third.len, 2);
        assert_eq!(state.total_evicted(), 1);
    }

    #[test]
    fn test_huge_capacity_ticks() {
        let mut state = EmitterState::new(&EmitterConfig::default().with_capacity(1 << 40)).unwrap();
        for _ in 0..3 {
            assert!(state.tick().evicted.is_none());
        }
        assert_eq!(state.buffer().len(), 3);
    }

    #[test]
    fn test_reset_restarts_sequence_keeps_totals() {
        let mut state = EmitterState::new(&EmitterConfig::default().with_capacity(4)).unwrap();
        for _ in 0..6 {
            state.tick();
        }
        assert_eq!(state.reset(), 4);
        assert!(state.buffer().is_empty());
        assert_eq!(state.tick().emitted.sequence, 1);
        assert_eq!(state.total_ticks(), 7);
        assert_eq!(state.total_evicted(), 2);
    }
}
