//! Order maintenance commands.
//!
//! # Usage
//!
//! ```bash
//! # Correct the email on a single order
//! sd-cli order update-email -i 100000123
//!
//! # Correct every order placed with a mistyped address
//! sd-cli order update-email -e jane@exmaple.com
//! ```
//!
//! # Environment Variables
//!
//! - `SALES_DATABASE_URL` - `PostgreSQL` connection string for the sales database
//! - `SALES_SINGLE_STORE_MODE` - Skip the website prompt

use thiserror::Error;

use salesdesk_core::IncrementId;

use crate::config::{CliConfig, ConfigError};
use crate::db::{self, CustomerRepository, OrderRepository, StoreRepository};
use crate::prompt::TerminalPrompter;
use crate::workflow::{OrderEmailUpdate, OrderSelector, Outcome, UpdateEmailError};

/// Errors that can occur while running an order command.
#[derive(Debug, Error)]
pub enum OrderCommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Update(#[from] UpdateEmailError),
}

/// Interactively replace the email on the orders matching the selector.
///
/// The selector is checked before connecting, so a missing one fails
/// without touching the database.
///
/// # Errors
///
/// Returns an error if no selector is given, configuration is missing,
/// the database cannot be reached, or the workflow fails.
pub async fn update_email(
    increment_id: Option<IncrementId>,
    email: Option<&str>,
) -> Result<Outcome, OrderCommandError> {
    let selector = OrderSelector::from_options(increment_id, email)?;
    let config = CliConfig::from_env()?;

    tracing::debug!("Connecting to sales database...");
    let pool = db::create_pool(&config.database_url).await?;

    let orders = OrderRepository::new(&pool);
    let customers = CustomerRepository::new(&pool);
    let stores = StoreRepository::new(&pool, config.single_store_mode);
    let workflow = OrderEmailUpdate::new(&orders, &orders, &customers, &stores);

    let mut prompter = TerminalPrompter::stdio();
    let outcome = workflow.run(&selector, &mut prompter).await?;

    if let Outcome::Committed(report) = &outcome {
        tracing::info!(updated = report.updated.len(), "Order email update complete");
    }

    pool.close().await;
    Ok(outcome)
}
