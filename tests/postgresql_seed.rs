//! End-to-end seeding test against a live PostgreSQL instance.
//!
//! The test drives the same pipeline the CLI runs:
//! 1. Reset the schema from a clean slate
//! 2. Seed a small, deterministic data set
//! 3. Verify row counts, referential integrity, and body format in SQL
//! 4. Verify a second run without a schema reset fails on the unique
//!    constraint (expected, not a bug)
//! 5. Verify a zero-user run inserts nothing and succeeds
//! 6. Clean up all test data
//!
//! Skipped unless `DATABASE_URL` is set in the environment.

use seed_generator::{message_body, MessageStrategy, SeedConfig, SeedGenerator};
use seed_postgresql::PostgresSeeder;
use tokio_postgres::NoTls;
use uuid::Uuid;

const SCHEMA_RESET: &str = "DROP TABLE IF EXISTS messages; DROP TABLE IF EXISTS users;";

const NUM_USERS: u64 = 5; // Small scale for integration tests
const RNG_SEED: u64 = 42;

fn test_config() -> SeedConfig {
    SeedConfig {
        num_users: NUM_USERS,
        min_messages_per_seed: 2,
        max_messages_per_seed: 4,
        strategy: MessageStrategy::PerUser,
        transactional: true,
        rng_seed: Some(RNG_SEED),
    }
}

#[tokio::test]
async fn test_seed_pipeline_small_scale() -> Result<(), Box<dyn std::error::Error>> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set; skipping live seeding test");
        return Ok(());
    };

    // Initialize tracing for debug output
    tracing_subscriber::fmt()
        .with_env_filter("seed_postgresql=info")
        .try_init()
        .ok();

    // Direct client for verification queries
    let (verify_client, connection) = tokio_postgres::connect(&database_url, NoTls).await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            tracing::error!("PostgreSQL connection error: {}", e);
        }
    });

    let seeder = PostgresSeeder::new(&database_url).await?;

    // === CLEANUP BEFORE (ensure clean initial state) ===
    seeder.init_schema(SCHEMA_RESET).await?;
    let script = std::fs::read_to_string("init.sql")?;
    seeder.init_schema(&script).await?;

    // === PHASE 1: SEED ===
    let mut generator = SeedGenerator::new(test_config())?;
    let metrics = seeder.run(&mut generator).await?;

    assert_eq!(metrics.users_inserted, NUM_USERS);
    assert_eq!(metrics.message_batches, NUM_USERS);
    assert_eq!(seeder.row_count("users").await?, metrics.users_inserted);
    assert_eq!(seeder.row_count("messages").await?, metrics.messages_inserted);

    // === PHASE 2: VERIFY ===
    // Usernames are sequential in creation order
    let rows = verify_client
        .query("SELECT username FROM users ORDER BY username", &[])
        .await?;
    let usernames: Vec<&str> = rows.iter().map(|r| r.get(0)).collect();
    assert_eq!(
        usernames,
        vec!["user_0001", "user_0002", "user_0003", "user_0004", "user_0005"]
    );

    // No orphaned foreign keys
    let row = verify_client
        .query_one(
            "SELECT COUNT(*) FROM messages m LEFT JOIN users u ON m.user_id = u.id \
             WHERE u.id IS NULL",
            &[],
        )
        .await?;
    let orphans: i64 = row.get(0);
    assert_eq!(orphans, 0);

    // Every body matches the template for its owning user, numbered from 1
    let rows = verify_client
        .query("SELECT user_id, message FROM messages ORDER BY id", &[])
        .await?;
    let mut seq_by_user: std::collections::HashMap<Uuid, u64> = std::collections::HashMap::new();
    for row in &rows {
        let user_id: Uuid = row.get(0);
        let body: &str = row.get(1);
        let seq = seq_by_user.entry(user_id).or_insert(0);
        *seq += 1;
        assert_eq!(body, message_body(&user_id, *seq));
    }

    // === PHASE 3: RERUN WITHOUT RESET FAILS ===
    // Usernames collide on the unique constraint; the whole run aborts and
    // row counts are unchanged (transactional batches roll back).
    let mut generator = SeedGenerator::new(test_config())?;
    assert!(seeder.run(&mut generator).await.is_err());
    assert_eq!(seeder.row_count("users").await?, NUM_USERS);

    // === PHASE 4: ZERO USERS IS A LEGAL RUN ===
    seeder.init_schema(SCHEMA_RESET).await?;
    seeder.init_schema(&script).await?;

    let config = SeedConfig {
        num_users: 0,
        strategy: MessageStrategy::FlatPool,
        ..test_config()
    };
    let mut generator = SeedGenerator::new(config)?;
    let metrics = seeder.run(&mut generator).await?;

    assert_eq!(metrics.users_inserted, 0);
    assert_eq!(metrics.messages_inserted, 0);
    assert_eq!(seeder.row_count("users").await?, 0);
    assert_eq!(seeder.row_count("messages").await?, 0);

    // === CLEANUP AFTER ===
    seeder.init_schema(SCHEMA_RESET).await?;

    Ok(())
}
