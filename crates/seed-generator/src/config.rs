//! Seed run configuration and validation.

use clap::ValueEnum;

/// Default number of users to insert.
pub const DEFAULT_NUM_USERS: u64 = 1000;

/// Default lower bound for a message count draw.
pub const DEFAULT_MIN_MESSAGES_PER_SEED: u64 = 1000;

/// Default upper bound for a message count draw.
pub const DEFAULT_MAX_MESSAGES_PER_SEED: u64 = 10000;

/// Error type for configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The message count range is inverted.
    #[error("invalid message count range: min {min} is greater than max {max}")]
    InvalidMessageRange { min: u64, max: u64 },
}

/// How generated messages reference the seeded users.
///
/// The two strategies are distinct policies and are never mixed within a
/// run: a message's owner and the user named in its body are always the
/// same user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MessageStrategy {
    /// One random message count for the whole run; each message picks a
    /// uniformly random owner from the full user list.
    #[value(name = "flat-pool")]
    FlatPool,
    /// One independent random message count per user; all of a user's
    /// messages reference that user.
    #[value(name = "per-user")]
    PerUser,
}

/// Configuration for a single seeding run.
#[derive(Clone, Copy, Debug)]
pub struct SeedConfig {
    /// Number of users to generate and insert.
    pub num_users: u64,
    /// Inclusive lower bound for each message count draw.
    pub min_messages_per_seed: u64,
    /// Inclusive upper bound for each message count draw.
    pub max_messages_per_seed: u64,
    /// Referential strategy for message generation.
    pub strategy: MessageStrategy,
    /// Wrap insert batches in transactions.
    pub transactional: bool,
    /// RNG seed for deterministic generation (same seed = same data).
    /// `None` seeds from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            num_users: DEFAULT_NUM_USERS,
            min_messages_per_seed: DEFAULT_MIN_MESSAGES_PER_SEED,
            max_messages_per_seed: DEFAULT_MAX_MESSAGES_PER_SEED,
            strategy: MessageStrategy::FlatPool,
            transactional: false,
            rng_seed: None,
        }
    }
}

impl SeedConfig {
    /// Validate the configuration.
    ///
    /// An inverted message count range is rejected here so it can never
    /// reach a random draw.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_messages_per_seed > self.max_messages_per_seed {
            return Err(ConfigError::InvalidMessageRange {
                min: self.min_messages_per_seed,
                max: self.max_messages_per_seed,
            });
        }
        Ok(())
    }
}
