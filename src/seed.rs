//! Seeding pipeline orchestration.
//!
//! Control flows strictly top to bottom: gate check, configuration
//! validation, schema script load, connect, schema init, user seeding,
//! message seeding. The first error aborts the run.

use anyhow::Context;
use seed_generator::SeedGenerator;
use seed_postgresql::{load_script, CountArgs, PostgresSeeder, SeedArgs, SeedMetrics};
use tracing::info;

/// Environment variable gating mock data generation.
pub const GENERATE_MOCK_DATA_ENV: &str = "GENERATE_MOCK_DATA";

/// Whether `GENERATE_MOCK_DATA` explicitly disables seeding.
///
/// The variable is optional: unset means proceed. When it is set to the
/// empty string or the literal `"false"`, the run is skipped.
pub fn mock_data_disabled() -> bool {
    gate_disabled(std::env::var(GENERATE_MOCK_DATA_ENV).ok().as_deref())
}

fn gate_disabled(value: Option<&str>) -> bool {
    match value {
        Some(value) => value.is_empty() || value == "false",
        None => false,
    }
}

/// Run the full seeding pipeline.
///
/// Returns `None` when the `GENERATE_MOCK_DATA` gate skipped the run,
/// otherwise the metrics of the completed run.
pub async fn run_seed(args: &SeedArgs) -> anyhow::Result<Option<SeedMetrics>> {
    if mock_data_disabled() {
        info!("{GENERATE_MOCK_DATA_ENV} is disabled; skipping mock data generation");
        return Ok(None);
    }

    // Fail fast on an invalid configuration, before touching the database.
    let config = args.common.to_config();
    let mut generator = SeedGenerator::new(config).context("invalid seed configuration")?;

    let script = load_script(&args.common.schema_file)?;

    let seeder = PostgresSeeder::new(&args.database_url)
        .await
        .context("failed to connect to the database")?;
    info!("Successfully connected to the database");

    seeder
        .init_schema(&script)
        .await
        .with_context(|| format!("failed to execute schema script {:?}", args.common.schema_file))?;

    let metrics = seeder
        .run(&mut generator)
        .await
        .context("seeding failed")?;

    Ok(Some(metrics))
}

/// Report current row counts for the seeded tables.
pub async fn run_count(args: &CountArgs) -> anyhow::Result<()> {
    let seeder = PostgresSeeder::new(&args.database_url)
        .await
        .context("failed to connect to the database")?;

    let users = seeder.row_count("users").await?;
    let messages = seeder.row_count("messages").await?;
    info!("Current row counts: {users} users, {messages} messages");

    Ok(())
}
