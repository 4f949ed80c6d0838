//! # Particle Buffer
//!
//! Fixed-capacity FIFO of live embers.
//!
//! ```text
//!   oldest                                   newest
//!   ┌──────┬──────┬──────┬─────┬──────┐
//!   │  p1  │  p2  │  p3  │ ... │  pN  │  <── push
//!   └──────┴──────┴──────┴─────┴──────┘
//!      │
//!      └──> evicted when N would exceed capacity
//! ```
//!
//! Eviction ignores remaining lifetime. The oldest ember goes first, always.

use std::collections::VecDeque;

use crate::constants::DEFAULT_CAPACITY;
use crate::error::{EmberError, EmberResult};
use crate::particle::Particle;

/// Bounded, insertion-ordered particle storage.
#[derive(Clone, Debug)]
pub struct ParticleBuffer {
    particles: VecDeque<Particle>,
    capacity: usize,
}

impl ParticleBuffer {
    /// Creates an empty buffer holding at most `capacity` particles.
    ///
    /// Storage for up to [`DEFAULT_CAPACITY`] particles is allocated up
    /// front; larger buffers grow on demand.
    ///
    /// # Errors
    ///
    /// Returns [`EmberError::InvalidCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> EmberResult<Self> {
        if capacity == 0 {
            return Err(EmberError::InvalidCapacity(capacity));
        }
        Ok(Self {
            // One spare slot: push happens before eviction.
            particles: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY) + 1),
            capacity,
        })
    }

    /// Appends `particle` at the back, evicting the front if over capacity.
    ///
    /// Returns the evicted particle, if any.
    pub fn push(&mut self, particle: Particle) -> Option<Particle> {
        self.particles.push_back(particle);
        if self.particles.len() > self.capacity {
            self.particles.pop_front()
        } else {
            None
        }
    }

    /// Number of particles currently held.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Returns true if no particles are held.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Maximum number of particles held at once.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if the next push will evict.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.particles.len() >= self.capacity
    }

    /// Iterates oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Particle> + ExactSizeIterator + '_ {
        self.particles.iter()
    }

    /// The next particle to be evicted.
    #[must_use]
    pub fn oldest(&self) -> Option<&Particle> {
        self.particles.front()
    }

    /// The most recently pushed particle.
    #[must_use]
    pub fn newest(&self) -> Option<&Particle> {
        self.particles.back()
    }

    /// Copies the contents out, oldest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Particle> {
        self.particles.iter().copied().collect()
    }

    /// Drops every particle, returning how many were held.
    pub fn clear(&mut self) -> usize {
        let dropped = self.particles.len();
        self.particles.clear();
        dropped
    }
}

impl<'a> IntoIterator for &'a ParticleBuffer {
    type Item = &'a Particle;
    type IntoIter = std::collections::vec_deque::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::ParticleId;

    fn particle(sequence: u64) -> Particle {
        Particle {
            id: ParticleId(sequence * 31),
            sequence,
            horizontal_offset: 0.0,
            size: 4.0,
            lifetime: 2.0,
        }
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(
            ParticleBuffer::with_capacity(0).unwrap_err(),
            EmberError::InvalidCapacity(0)
        );
    }

    #[test]
    fn test_push_below_capacity_keeps_everything() {
        let mut buf = ParticleBuffer::with_capacity(4).unwrap();
        for seq in 1..=4 {
            assert!(buf.push(particle(seq)).is_none());
        }
        assert_eq!(buf.len(), 4);
        assert!(buf.is_full());
        assert_eq!(buf.oldest().map(|p| p.sequence), Some(1));
        assert_eq!(buf.newest().map(|p| p.sequence), Some(4));
    }

    #[test]
    fn test_push_at_capacity_evicts_oldest() {
        let mut buf = ParticleBuffer::with_capacity(3).unwrap();
        for seq in 1..=3 {
            buf.push(particle(seq));
        }
        let before = buf.to_vec();

        let evicted = buf.push(particle(4));

        assert_eq!(evicted, Some(before[0]));
        let mut expected = before[1..].to_vec();
        expected.push(particle(4));
        assert_eq!(buf.to_vec(), expected);
    }

    #[test]
    fn test_capacity_one_always_holds_newest() {
        let mut buf = ParticleBuffer::with_capacity(1).unwrap();
        assert!(buf.push(particle(1)).is_none());
        for seq in 2..=10 {
            let evicted = buf.push(particle(seq)).unwrap();
            assert_eq!(evicted.sequence, seq - 1);
            assert_eq!(buf.len(), 1);
            assert_eq!(buf.newest().unwrap().sequence, seq);
        }
    }

    #[test]
    fn test_huge_capacity_does_not_preallocate() {
        for capacity in [usize::MAX, 1 << 40] {
            let mut buf = ParticleBuffer::with_capacity(capacity).unwrap();
            assert_eq!(buf.capacity(), capacity);
            for seq in 1..=3 {
                assert!(buf.push(particle(seq)).is_none());
            }
            assert_eq!(buf.len(), 3);
            assert!(!buf.is_full());
        }
    }

    #[test]
    fn test_clear_reports_dropped() {
        let mut buf = ParticleBuffer::with_capacity(8).unwrap();
        for seq in 1..=5 {
            buf.push(particle(seq));
        }
        assert_eq!(buf.clear(), 5);
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 8);
    }

    #[test]
    fn test_iter_is_oldest_first() {
        let mut buf = ParticleBuffer::with_capacity(3).unwrap();
        for seq in 1..=5 {
            buf.push(particle(seq));
        }
        let seqs: Vec<u64> = buf.iter().map(|p| p.sequence).collect();
        assert_eq!(seqs, vec![3, 4, 5]);
        let rev: Vec<u64> = (&buf).into_iter().rev().map(|p| p.sequence).collect();
        assert_eq!(rev, vec![5, 4, 3]);
    }
}
