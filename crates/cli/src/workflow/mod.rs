//! Interactive correction of the email address recorded on sales orders.
//!
//! One run walks five stages in order and never loops back:
//!
//! 1. resolve the website scope (silently when the deployment has a single
//!    store, otherwise by asking the operator)
//! 2. load the target orders by increment id (first match) or by current
//!    email (every match)
//! 3. ask for the new address and validate it
//! 4. if a customer in scope owns that address, ask whether to re-link the
//!    orders to that customer
//! 5. show the pending change, ask for confirmation, then save each order
//!
//! Any failure before stage 5 leaves every order untouched. Saves are not
//! transactional: if one fails, the orders saved before it stay saved and
//! the rest are not attempted.

pub mod plan;
pub mod ports;

use std::io;

use thiserror::Error;

use salesdesk_core::{Email, EmailError, IncrementId, Order, WebsiteId};

pub use plan::{CommitReport, UpdatePlan};
pub use ports::{CustomerResolver, OrderFilter, OrderFinder, OrderWriter, ScopeProvider};

use crate::db::RepositoryError;
use crate::prompt::Prompter;

const ASK_WEBSITE: &str = "Please enter website ID : ";
const ASK_NEW_EMAIL: &str = "Please enter the new email address : ";
const CONFIRM_ASSOCIATION: &str = "Change customer association? [y|n] : ";
const CONFIRM_UPDATE: &str = "Continue with update? [y|n] : ";

/// Errors that end an update run.
#[derive(Debug, Error)]
pub enum UpdateEmailError {
    /// Neither an increment id nor an email was given.
    #[error("No increment_id or email specified")]
    MissingSelector,

    /// The operator typed a website id that was not offered.
    #[error("Invalid Website ID {0:?}")]
    InvalidWebsite(String),

    /// The replacement address is malformed.
    #[error("Invalid email format {input:?}: {source}")]
    InvalidEmail {
        input: String,
        #[source]
        source: EmailError,
    },

    /// No order has the requested increment id.
    #[error("Couldn't find the order with ID #{0}")]
    OrderNotFound(IncrementId),

    /// No order carries the requested email.
    #[error("Couldn't find the order with email {0}")]
    NoOrdersForEmail(String),

    /// Re-linking would attach an order to a customer of another website.
    #[error(
        "Order #{increment_id} belongs to website {order_website} and cannot be linked to a customer of website {scope}"
    )]
    ScopeMismatch {
        increment_id: IncrementId,
        order_website: WebsiteId,
        scope: WebsiteId,
    },

    /// A save failed mid-commit. `updated` lists the orders already saved.
    #[error(
        "Failed to save order #{increment_id} after updating {} order(s): {source}",
        .updated.len()
    )]
    Persistence {
        increment_id: IncrementId,
        updated: Vec<IncrementId>,
        #[source]
        source: RepositoryError,
    },

    /// A lookup against the store failed.
    #[error("Store lookup failed: {0}")]
    Repository(#[from] RepositoryError),

    /// The terminal could not be read or written.
    #[error("Terminal error: {0}")]
    Prompt(#[from] io::Error),
}

/// Which orders to update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderSelector {
    /// The single order with this increment id.
    IncrementId(IncrementId),
    /// Every order currently recorded with this email.
    Email(String),
}

impl OrderSelector {
    /// Pick the selector from the two optional command line values.
    ///
    /// The increment id wins when both are given.
    ///
    /// # Errors
    ///
    /// Returns `UpdateEmailError::MissingSelector` if neither is given.
    pub fn from_options(
        increment_id: Option<IncrementId>,
        email: Option<&str>,
    ) -> Result<Self, UpdateEmailError> {
        match (increment_id, email) {
            (Some(increment_id), ignored) => {
                if let Some(email) = ignored {
                    tracing::warn!(%increment_id, email, "Both selectors given, ignoring email");
                }
                Ok(Self::IncrementId(increment_id))
            }
            (None, Some(email)) if !email.is_empty() => Ok(Self::Email(email.to_owned())),
            _ => Err(UpdateEmailError::MissingSelector),
        }
    }

    fn filter(&self) -> OrderFilter {
        match self {
            Self::IncrementId(increment_id) => OrderFilter::IncrementId(increment_id.clone()),
            Self::Email(email) => OrderFilter::CustomerEmail(email.clone()),
        }
    }
}

/// How a run ended when nothing went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The operator confirmed and every order was saved.
    Committed(CommitReport),
    /// The operator declined the final confirmation.
    Cancelled,
}

/// The order email update workflow, wired to its collaborators.
pub struct OrderEmailUpdate<'a> {
    orders: &'a dyn OrderFinder,
    writer: &'a dyn OrderWriter,
    customers: &'a dyn CustomerResolver,
    scopes: &'a dyn ScopeProvider,
}

impl<'a> OrderEmailUpdate<'a> {
    #[must_use]
    pub const fn new(
        orders: &'a dyn OrderFinder,
        writer: &'a dyn OrderWriter,
        customers: &'a dyn CustomerResolver,
        scopes: &'a dyn ScopeProvider,
    ) -> Self {
        Self {
            orders,
            writer,
            customers,
            scopes,
        }
    }

    /// Run the workflow once, asking `prompter` for every decision.
    ///
    /// # Errors
    ///
    /// Returns an `UpdateEmailError` for invalid answers, unknown orders,
    /// store failures and failed saves. Only
    /// `UpdateEmailError::Persistence` can leave orders modified. Once
    /// saving starts, terminal write failures are logged and do not stop
    /// the remaining saves.
    pub async fn run(
        &self,
        selector: &OrderSelector,
        prompter: &mut dyn Prompter,
    ) -> Result<Outcome, UpdateEmailError> {
        let scope = self.resolve_scope(prompter).await?;
        tracing::debug!(%scope, "Website scope resolved");

        let orders = self.resolve_orders(selector, prompter).await?;
        tracing::info!(count = orders.len(), "Target orders resolved");
        prompter.say("")?;

        let new_email = capture_email(prompter)?;

        let customer = self.customers.find_by_email(&new_email, scope).await?;
        let reassociate = match &customer {
            Some(customer) => {
                tracing::info!(
                    customer_id = %customer.id,
                    "New email belongs to a customer in scope"
                );
                prompter.confirm(CONFIRM_ASSOCIATION, false)?
            }
            None => false,
        };

        let plan = UpdatePlan::new(new_email, customer.as_ref(), reassociate);
        if let Some(order) = plan.out_of_scope(&orders, scope) {
            return Err(UpdateEmailError::ScopeMismatch {
                increment_id: order.increment_id.clone(),
                order_website: order.website_id,
                scope,
            });
        }

        prompter.say(&format!("Set orders to email {}", plan.new_email()))?;
        prompter.say("")?;

        if !prompter.confirm(CONFIRM_UPDATE, false)? {
            prompter.say("")?;
            prompter.say("Cancelled")?;
            tracing::info!("Update cancelled by operator");
            return Ok(Outcome::Cancelled);
        }

        let report = self.commit(&plan, orders, prompter).await?;
        Ok(Outcome::Committed(report))
    }

    async fn resolve_scope(
        &self,
        prompter: &mut dyn Prompter,
    ) -> Result<WebsiteId, UpdateEmailError> {
        if let Some(website) = self.scopes.single_website().await? {
            return Ok(website);
        }

        let websites = self.scopes.websites().await?;
        if let [only] = websites.as_slice() {
            return Ok(only.id);
        }

        prompter.say("Please select a Website scope :")?;
        for website in &websites {
            prompter.say(&website.to_string())?;
        }

        let answer = prompter.ask(ASK_WEBSITE)?;
        answer
            .parse::<WebsiteId>()
            .ok()
            .filter(|id| websites.iter().any(|website| website.id == *id))
            .ok_or(UpdateEmailError::InvalidWebsite(answer))
    }

    async fn resolve_orders(
        &self,
        selector: &OrderSelector,
        prompter: &mut dyn Prompter,
    ) -> Result<Vec<Order>, UpdateEmailError> {
        let orders = self.orders.find_orders(&selector.filter()).await?;

        match selector {
            OrderSelector::IncrementId(increment_id) => {
                let order = orders
                    .into_iter()
                    .next()
                    .ok_or_else(|| UpdateEmailError::OrderNotFound(increment_id.clone()))?;
                prompter.say(&format!(
                    "Order #{} current email address : {}",
                    order.increment_id, order.customer_email
                ))?;
                Ok(vec![order])
            }
            OrderSelector::Email(email) => {
                if orders.is_empty() {
                    return Err(UpdateEmailError::NoOrdersForEmail(email.clone()));
                }
                prompter.say(&format!("Current orders with email address : {email}"))?;
                for order in &orders {
                    prompter.say(&format!(
                        "#{} ({}, placed {})",
                        order.increment_id,
                        order.state,
                        order.created_at.format("%Y-%m-%d")
                    ))?;
                }
                Ok(orders)
            }
        }
    }

    async fn commit(
        &self,
        plan: &UpdatePlan,
        orders: Vec<Order>,
        prompter: &mut dyn Prompter,
    ) -> Result<CommitReport, UpdateEmailError> {
        let total = orders.len();
        let mut report = CommitReport::default();

        for mut order in orders {
            plan.apply(&mut order);

            if let Err(source) = self.writer.save_order(&order).await {
                tracing::error!(
                    increment_id = %order.increment_id,
                    updated = report.updated.len(),
                    skipped = total - report.updated.len() - 1,
                    "Order save failed, stopping"
                );
                return Err(UpdateEmailError::Persistence {
                    increment_id: order.increment_id,
                    updated: report.updated,
                    source,
                });
            }

            tracing::info!(
                increment_id = %order.increment_id,
                customer_id = ?plan.association(),
                "Order email updated"
            );
            // Already saved: a failed progress line is only logged
            if let Err(err) = prompter.say(&format!("Updated #{}", order.increment_id)) {
                tracing::warn!(
                    increment_id = %order.increment_id,
                    "Failed to report progress: {err}"
                );
            }
            report.updated.push(order.increment_id);
        }

        Ok(report)
    }
}

fn capture_email(prompter: &mut dyn Prompter) -> Result<Email, UpdateEmailError> {
    let input = prompter.ask(ASK_NEW_EMAIL)?;
    Email::parse(&input).map_err(|source| UpdateEmailError::InvalidEmail { input, source })
}
