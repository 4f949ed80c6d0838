//! # Particle Sampler
//!
//! Draws embers with each randomized field sampled independently and
//! uniformly from its range. Seeded samplers replay exactly; unseeded ones
//! pull a seed from OS entropy.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::EmberResult;
use crate::particle::{Particle, ParticleId, SpawnRanges};

/// Random source for new particles.
#[derive(Clone, Debug)]
pub struct ParticleSampler {
    ranges: SpawnRanges,
    rng: ChaCha8Rng,
}

impl ParticleSampler {
    /// Creates a sampler over `ranges`.
    ///
    /// With `Some(seed)` the particle stream is reproducible.
    ///
    /// # Errors
    ///
    /// Returns [`EmberError::InvalidRange`](crate::EmberError::InvalidRange)
    /// if any range is malformed.
    pub fn new(ranges: SpawnRanges, seed: Option<u64>) -> EmberResult<Self> {
        ranges.validate()?;
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self { ranges, rng })
    }

    /// The ranges particles are drawn from.
    #[inline]
    #[must_use]
    pub const fn ranges(&self) -> &SpawnRanges {
        &self.ranges
    }

    /// Draws one particle tagged with `sequence`.
    pub fn sample(&mut self, sequence: u64) -> Particle {
        Particle {
            id: ParticleId(self.rng.gen()),
            sequence,
            horizontal_offset: self.ranges.offset.sample(&mut self.rng),
            size: self.ranges.size.sample(&mut self.rng),
            lifetime: self.ranges.lifetime.sample(&mut self.rng),
        }
    }
}
