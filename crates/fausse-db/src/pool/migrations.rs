//! Schema migrations
//!
//! The SQL files in `migrations/` are read at runtime, so the binary has to
//! run where that directory is reachable, or `MIGRATIONS_DIR` must point at a
//! copy of it.

use std::path::{Path, PathBuf};

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::info;

const BUNDLED_MIGRATIONS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations");

fn migrations_dir() -> PathBuf {
    std::env::var("MIGRATIONS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(BUNDLED_MIGRATIONS))
}

/// Apply all pending migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    run_migrations_from(&migrations_dir(), pool).await
}

/// Apply all pending migrations found in `dir`
pub async fn run_migrations_from(dir: &Path, pool: &PgPool) -> Result<(), MigrateError> {
    let migrator = Migrator::new(dir).await?;
    migrator.run(pool).await?;
    info!(dir = %dir.display(), count = migrator.iter().count(), "Database migrations applied");
    Ok(())
}
