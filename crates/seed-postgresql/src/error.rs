//! Error types for the PostgreSQL seeder.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while seeding.
///
/// Every variant is fatal to the run: the pipeline stops at the first
/// error and the process exits non-zero.
#[derive(Error, Debug)]
pub enum SeederError {
    /// PostgreSQL connection or query error.
    #[error("PostgreSQL error: {0}")]
    PostgreSQL(#[from] tokio_postgres::Error),

    /// The schema script could not be read.
    #[error("failed to read schema script {path:?}: {source}")]
    SchemaScript {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid seed configuration.
    #[error("configuration error: {0}")]
    Config(#[from] seed_generator::ConfigError),
}
