//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! sd-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `SALES_DATABASE_URL` - `PostgreSQL` connection string for the sales database
//!
//! # Migration Files
//!
//! Stored in `crates/cli/migrations/` and embedded at build time:
//! ```text
//! migrations/
//! ├── 20260301000001_create_sales_schema.sql
//! ├── 20260301000002_create_customers.sql
//! └── 20260301000003_create_sales_orders.sql
//! ```

use sqlx::PgPool;
use thiserror::Error;

use crate::config::{CliConfig, ConfigError};
use crate::db;

/// Errors that can occur while migrating.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Apply all pending sales schema migrations to `pool`.
///
/// # Errors
///
/// Returns `MigrationError::Migration` if a migration fails or the applied
/// history does not match the embedded files.
pub async fn apply(pool: &PgPool) -> Result<(), MigrationError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Run sales database migrations.
///
/// # Errors
///
/// Returns an error if configuration is missing, the database cannot be
/// reached or a migration fails.
pub async fn sales() -> Result<(), MigrationError> {
    let config = CliConfig::from_env()?;

    tracing::info!("Connecting to sales database...");
    let pool = db::create_pool(&config.database_url).await?;

    tracing::info!("Running sales migrations...");
    apply(&pool).await?;

    tracing::info!("Sales migrations complete!");
    Ok(())
}
