//! Deterministic random source.
//!
//! A Lehmer (Park–Miller) linear congruential generator with multiplier
//! 16807 and modulus `2^31 - 1`. The state is threaded explicitly through
//! every draw: no global, no external entropy. Two sources built from the
//! same seed and consulted at the same draw sites yield identical streams.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Generator modulus, `2^31 - 1`.
pub const MODULUS: u32 = 2_147_483_647;

/// Generator multiplier.
pub const MULTIPLIER: u64 = 16_807;

/// Seed used by the reference runs.
pub const REFERENCE_SEED: u32 = 314_159;

/// Build a bucket count at compile time.
#[must_use]
pub const fn buckets(n: u32) -> NonZeroU32 {
    match NonZeroU32::new(n) {
        Some(n) => n,
        None => panic!("bucket count must be non-zero"),
    }
}

/// Advance the generator state by one step.
///
/// The product is taken in 64 bits; `16807 * (2^31 - 2)` needs 46.
#[must_use]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn next_state(state: u32) -> u32 {
    let next = (MULTIPLIER * state as u64) % MODULUS as u64;
    // Always < MODULUS, which fits in u32.
    next as u32
}

/// Map a generator state onto a zero-based bucket index.
///
/// `[0, MODULUS)` is split into `buckets` ranges of width
/// `MODULUS / buckets`; the cumulative boundary is scanned until it passes
/// `state`. States past the last full boundary (the truncation remainder)
/// belong to the last bucket.
#[must_use]
pub fn bounded_draw(state: u32, buckets: NonZeroU32) -> u32 {
    let count = buckets.get();
    let width = u64::from(MODULUS / count);
    let state = u64::from(state);

    let mut boundary = 0_u64;
    let mut index = 0_u32;
    loop {
        boundary += width;
        if state < boundary || index + 1 == count {
            return index;
        }
        index += 1;
    }
}

/// Shared, explicitly threaded generator state.
///
/// A single source is handed from lot to lot so the whole campaign
/// consumes one continuous draw sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomSource {
    state: u32,
}

impl RandomSource {
    /// Create a source from a seed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSeed`] when `seed` is 0 (a fixed point
    /// of the generator) or not below [`MODULUS`].
    pub const fn new(seed: u32) -> Result<Self, ConfigError> {
        if seed == 0 || seed >= MODULUS {
            return Err(ConfigError::InvalidSeed { seed });
        }
        Ok(Self { state: seed })
    }

    /// Source seeded with [`REFERENCE_SEED`].
    #[must_use]
    pub const fn reference() -> Self {
        Self {
            state: REFERENCE_SEED,
        }
    }

    /// Current generator state.
    #[must_use]
    pub const fn state(&self) -> u32 {
        self.state
    }

    /// Advance the state, then map the new state onto `[0, buckets)`.
    pub fn draw(&mut self, buckets: NonZeroU32) -> u32 {
        self.state = next_state(self.state);
        bounded_draw(self.state, buckets)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::reference()
    }
}
