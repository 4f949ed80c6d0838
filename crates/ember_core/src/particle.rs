//! # Particle Model
//!
//! An ember is a plain value: the emitter samples it once and never touches
//! it again. Animation (rise, fade, shrink) is the renderer's job, driven by
//! the fields below.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{DEFAULT_LIFETIME_RANGE, DEFAULT_OFFSET_RANGE, DEFAULT_SIZE_RANGE};
use crate::error::{EmberError, EmberResult};

/// Opaque particle identifier.
///
/// Drawn at random on emission. Collisions are possible and tolerated: the
/// id only keys render reconciliation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticleId(pub u64);

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// A single ember.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Render key.
    pub id: ParticleId,
    /// Emission index within the current lifecycle, starting at 1.
    pub sequence: u64,
    /// Lateral displacement from the torch centre (percent).
    pub horizontal_offset: f32,
    /// Visual size (pixels).
    pub size: f32,
    /// How long the ember's animation runs (seconds).
    pub lifetime: f32,
}

/// Closed interval `[min, max]` a randomized field is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpawnRange {
    /// Inclusive lower bound.
    pub min: f32,
    /// Inclusive upper bound.
    pub max: f32,
}

impl SpawnRange {
    /// Creates a range. Not validated until [`SpawnRange::validate`].
    #[inline]
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Degenerate range that always yields `value`.
    #[inline]
    #[must_use]
    pub const fn fixed(value: f32) -> Self {
        Self { min: value, max: value }
    }

    /// Checks both bounds are finite and ordered, and that the interval is
    /// narrow enough to sample without overflowing `f32`.
    ///
    /// # Errors
    ///
    /// Returns [`EmberError::InvalidRange`] naming `field` otherwise.
    pub fn validate(&self, field: &'static str) -> EmberResult<()> {
        // The uniform sampler scales the width by 1 / (1 - EPSILON).
        let sampleable = (self.span() / (1.0 - f32::EPSILON)).is_finite();
        if self.min.is_finite() && self.max.is_finite() && self.min <= self.max && sampleable {
            Ok(())
        } else {
            Err(EmberError::InvalidRange {
                field,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Returns true if `value` lies inside the closed interval.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Width of the interval.
    #[inline]
    #[must_use]
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Draws a uniform value from the interval.
    ///
    /// The range must have passed [`SpawnRange::validate`].
    #[inline]
    pub(crate) fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        // Clamp guards against float rounding at the upper edge.
        rng.gen_range(self.min..=self.max).clamp(self.min, self.max)
    }
}

impl From<(f32, f32)> for SpawnRange {
    fn from((min, max): (f32, f32)) -> Self {
        Self::new(min, max)
    }
}

/// The three randomized particle fields and their ranges.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpawnRanges {
    /// Range for [`Particle::horizontal_offset`].
    pub offset: SpawnRange,
    /// Range for [`Particle::size`].
    pub size: SpawnRange,
    /// Range for [`Particle::lifetime`].
    pub lifetime: SpawnRange,
}

impl Default for SpawnRanges {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET_RANGE.into(),
            size: DEFAULT_SIZE_RANGE.into(),
            lifetime: DEFAULT_LIFETIME_RANGE.into(),
        }
    }
}

impl SpawnRanges {
    /// Validates every range.
    ///
    /// # Errors
    ///
    /// Returns the first [`EmberError::InvalidRange`] found.
    pub fn validate(&self) -> EmberResult<()> {
        self.offset.validate("offset")?;
        self.size.validate("size")?;
        self.lifetime.validate("lifetime")
    }

    /// Returns true if every randomized field of `particle` is in range.
    #[must_use]
    pub fn admits(&self, particle: &Particle) -> bool {
        self.offset.contains(particle.horizontal_offset)
            && self.size.contains(particle.size)
            && self.lifetime.contains(particle.lifetime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_default_ranges_match_torch() {
        let ranges = SpawnRanges::default();
        assert_eq!(ranges.offset, SpawnRange::new(-50.0, 50.0));
        assert_eq!(ranges.size, SpawnRange::new(4.0, 12.0));
        assert_eq!(ranges.lifetime, SpawnRange::new(2.0, 5.0));
        assert!(ranges.validate().is_ok());
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        let err = SpawnRange::new(5.0, 1.0).validate("size").unwrap_err();
        assert_eq!(
            err,
            EmberError::InvalidRange {
                field: "size",
                min: 5.0,
                max: 1.0
            }
        );
    }

    #[test]
    fn test_range_rejects_non_finite() {
        assert!(SpawnRange::new(f32::NAN, 1.0).validate("offset").is_err());
        assert!(SpawnRange::new(0.0, f32::INFINITY).validate("offset").is_err());
        assert!(SpawnRange::new(f32::NEG_INFINITY, 0.0).validate("offset").is_err());
    }

    #[test]
    fn test_range_rejects_overflowing_width() {
        let err = SpawnRange::new(-3.0e38, 3.0e38).validate("offset").unwrap_err();
        assert!(matches!(err, EmberError::InvalidRange { field: "offset", .. }));
        assert!(SpawnRange::new(f32::MIN, f32::MAX).validate("offset").is_err());
        assert!(SpawnRange::new(0.0, f32::MAX).validate("offset").is_err());
    }

    #[test]
    fn test_wide_but_sampleable_range_samples() {
        let range = SpawnRange::new(-1.0e38, 1.0e38);
        assert!(range.validate("offset").is_ok());
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..1_000 {
            assert!(range.contains(range.sample(&mut rng)));
        }
    }

    #[test]
    fn test_sample_stays_in_closed_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let range = SpawnRange::new(-50.0, 50.0);
        for _ in 0..10_000 {
            let v = range.sample(&mut rng);
            assert!(range.contains(v), "{v} escaped {range:?}");
        }
    }

    #[test]
    fn test_fixed_range_always_yields_value() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let range = SpawnRange::fixed(3.5);
        assert!(range.validate("lifetime").is_ok());
        for _ in 0..100 {
            assert_eq!(range.sample(&mut rng), 3.5);
        }
    }

    #[test]
    fn test_particle_id_display_is_hex() {
        assert_eq!(ParticleId(255).to_string(), "00000000000000ff");
    }
}
