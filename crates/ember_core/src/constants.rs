//! # Torch Defaults
//!
//! The values the torch effect ships with. All of them can be overridden
//! through [`EmitterConfig`](crate::EmitterConfig).

// =============================================================================
// SCHEDULE
// =============================================================================

/// Time between emitted embers, in milliseconds.
pub const DEFAULT_PERIOD_MS: u64 = 200;

/// Maximum embers alive at once.
pub const DEFAULT_CAPACITY: usize = 100;

// =============================================================================
// SPAWN RANGES (closed intervals)
// =============================================================================

/// Horizontal offset, percent of the torch width from centre.
pub const DEFAULT_OFFSET_RANGE: (f32, f32) = (-50.0, 50.0);

/// Ember size in pixels.
pub const DEFAULT_SIZE_RANGE: (f32, f32) = (4.0, 12.0);

/// Animation lifetime in seconds.
pub const DEFAULT_LIFETIME_RANGE: (f32, f32) = (2.0, 5.0);
