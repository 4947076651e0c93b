//! Salesdesk CLI - Order maintenance and database tools.
//!
//! # Usage
//!
//! ```bash
//! # Run sales database migrations
//! sd-cli migrate
//!
//! # Change the email on order #100000123
//! sd-cli order update-email -i 100000123
//!
//! # Change the email on every order placed with old@example.com
//! sd-cli order update-email -e old@example.com
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `order update-email` - Interactively correct the email on orders

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use salesdesk_cli::commands;
use salesdesk_core::IncrementId;

#[derive(Parser)]
#[command(name = "sd-cli")]
#[command(author, version, about = "Salesdesk CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Maintain sales orders
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// Update the email address on existing orders
    UpdateEmail {
        /// Increment ID search
        #[arg(short, long)]
        increment_id: Option<IncrementId>,

        /// Email address search
        #[arg(short, long)]
        email: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so they never interleave with prompts on stdout
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "salesdesk_cli=info,sd_cli=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::sales().await?,
        Commands::Order { action } => match action {
            OrderAction::UpdateEmail {
                increment_id,
                email,
            } => {
                commands::order::update_email(increment_id, email.as_deref()).await?;
            }
        },
    }
    Ok(())
}
