//! Mock data generator for the mock-seed tool.
//!
//! This crate produces the synthetic users and messages that the seeding
//! pipeline inserts into PostgreSQL. Generation is deterministic when given
//! an explicit RNG seed, so the same configuration reproduces the same data
//! across runs.
//!
//! # Architecture
//!
//! ```text
//! SeedConfig (CLI flags)
//!        │
//!        ▼
//! ┌─────────────────┐
//! │  SeedGenerator  │
//! │                 │
//! │  - config       │
//! │  - rng (StdRng) │
//! └────────┬────────┘
//!          │
//!          ├──► Vec<UserRecord { id, username }>
//!          │
//!          └──► Vec<MessageBatch { messages }>
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_generator::{SeedConfig, SeedGenerator};
//!
//! let config = SeedConfig {
//!     num_users: 3,
//!     min_messages_per_seed: 2,
//!     max_messages_per_seed: 2,
//!     rng_seed: Some(42),
//!     ..SeedConfig::default()
//! };
//!
//! let mut generator = SeedGenerator::new(config).unwrap();
//! let users = generator.users();
//! let batches = generator.message_batches(&users);
//! assert_eq!(users.len(), 3);
//! assert_eq!(batches.len(), 1); // flat-pool: one batch for the whole run
//! assert_eq!(batches[0].len(), 2);
//! ```
//!
//! # Referential strategies
//!
//! Two message-generation strategies are supported, selected via
//! [`MessageStrategy`]:
//!
//! - `flat-pool` - a single random message count for the whole run; each
//!   message picks a uniformly random owner from the seeded user list
//! - `per-user` - an independent random message count per user; all of a
//!   user's messages reference that user
//!
//! Every generated message references a user produced in the same run, so
//! inserting all users before any messages preserves foreign-key integrity.

pub mod config;
pub mod generator;

// Re-exports for convenience
pub use config::{
    ConfigError, MessageStrategy, SeedConfig, DEFAULT_MAX_MESSAGES_PER_SEED,
    DEFAULT_MIN_MESSAGES_PER_SEED, DEFAULT_NUM_USERS,
};
pub use generator::{message_body, MessageBatch, MessageRecord, SeedGenerator, UserRecord};
