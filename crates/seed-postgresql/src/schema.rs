//! Schema initialization script loading.

use crate::error::SeederError;
use std::path::Path;

/// Default schema script filename, resolved relative to the working
/// directory like the rest of the CLI's relative paths.
pub const DEFAULT_SCHEMA_FILE: &str = "init.sql";

/// Read a schema/initialization SQL script fully into memory.
///
/// The script is executed verbatim as a single multi-statement command by
/// [`crate::PostgresSeeder::init_schema`]. A missing or unreadable file is
/// fatal, since a missing schema makes all downstream work meaningless.
pub fn load_script(path: &Path) -> Result<String, SeederError> {
    std::fs::read_to_string(path).map_err(|source| SeederError::SchemaScript {
        path: path.to_path_buf(),
        source,
    })
}
