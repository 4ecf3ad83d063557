//! mock-seed: seed a PostgreSQL database with mock users and messages.
//!
//! The library surface exists so integration tests can drive the same
//! pipeline the CLI runs. See [`seed`] for the pipeline itself.

pub mod seed;
