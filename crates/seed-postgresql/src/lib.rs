//! PostgreSQL seeder for the mock-seed tool.
//!
//! This crate owns everything that touches the database: connection setup,
//! schema-script execution, the prepared-statement insert loops for users
//! and messages, optional transactional batching, and seeding metrics.
//!
//! The insert pipeline is strictly sequential: one client, one in-flight
//! statement, transactions scoped begin -> prepare -> N inserts -> commit.
//! Any failure is fatal to the run and surfaces as a [`SeederError`].

pub mod args;
pub mod error;
pub mod schema;
pub mod seeder;

// Re-exports for convenience
pub use args::{CommonSeedArgs, CountArgs, SeedArgs};
pub use error::SeederError;
pub use schema::load_script;
pub use seeder::{PostgresSeeder, SeedMetrics, INSERT_MESSAGE_SQL, INSERT_USER_SQL};
