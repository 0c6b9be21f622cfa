//! Schema migrations
//!
//! Migrations are plain SQL files read at runtime; the crate does not enable
//! the sqlx macros feature.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use std::path::{Path, PathBuf};
use tracing::info;

/// `migrations/` directory shipped with this crate
pub fn default_migrations_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/migrations"))
}

/// Apply all pending migrations from `dir`
pub async fn run_migrations(pool: &PgPool, dir: &Path) -> Result<(), MigrateError> {
    let migrator = Migrator::new(dir).await?;
    info!(
        dir = %dir.display(),
        migrations = migrator.iter().count(),
        "Running database migrations"
    );
    migrator.run(pool).await
}
