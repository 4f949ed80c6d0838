//! Notifications sent to listeners after every buffer mutation.

use ember_core::Particle;

/// A change to the emitter's buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EmitterEvent {
    /// A tick appended `particle`, evicting `evicted` if the buffer was full.
    Emitted {
        /// Newly appended particle, now the newest in the buffer.
        particle: Particle,
        /// Particle removed from the front, if any.
        evicted: Option<Particle>,
        /// Buffer length after the tick.
        len: usize,
    },
    /// `stop()` tore the buffer down.
    Cleared {
        /// How many particles were dropped.
        dropped: usize,
    },
}

impl EmitterEvent {
    /// The emitted particle, for `Emitted` events.
    #[must_use]
    pub const fn emitted(&self) -> Option<&Particle> {
        match self {
            Self::Emitted { particle, .. } => Some(particle),
            Self::Cleared { .. } => None,
        }
    }
}
