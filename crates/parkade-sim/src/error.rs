use crate::rng::MODULUS;

/// Rejected simulation configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Seed is 0 (a fixed point of the generator) or not below the modulus.
    #[error("seed must be in 1..{MODULUS}, got {seed}")]
    InvalidSeed {
        /// The rejected seed.
        seed: u32,
    },

    /// No lot capacities were configured.
    #[error("lot_capacities must not be empty")]
    NoLots,

    /// `days * 24` does not fit the hour counter.
    #[error("simulated duration of {days} days overflows the hour counter")]
    DurationOverflow {
        /// Requested number of days.
        days: u32,
    },

    /// A lot index outside the configured capacities.
    #[error("lot index {index} out of range ({count} lots configured)")]
    LotIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of configured lots.
        count: usize,
    },
}
