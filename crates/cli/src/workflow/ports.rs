//! Collaborators the workflow calls.
//!
//! The workflow only sees these traits. `crate::db` implements them over
//! `PostgreSQL`; tests implement them in memory.

use async_trait::async_trait;

use salesdesk_core::{Customer, Email, IncrementId, Order, Website, WebsiteId};

use crate::db::RepositoryError;

/// Equality filter for an order query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderFilter {
    /// Orders whose increment id equals the value.
    IncrementId(IncrementId),
    /// Orders whose stored customer email equals the value exactly.
    CustomerEmail(String),
}

/// Order queries.
#[async_trait]
pub trait OrderFinder: Send + Sync {
    /// All orders matching `filter`, in the store's order.
    async fn find_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>, RepositoryError>;
}

/// Order persistence.
#[async_trait]
pub trait OrderWriter: Send + Sync {
    /// Persist the contact email and customer linkage of `order`.
    ///
    /// Returns [`RepositoryError::NotFound`] if the order no longer exists.
    async fn save_order(&self, order: &Order) -> Result<(), RepositoryError>;
}

/// Customer lookup.
#[async_trait]
pub trait CustomerResolver: Send + Sync {
    /// The customer registered with `email` on `website`, if any.
    async fn find_by_email(
        &self,
        email: &Email,
        website: WebsiteId,
    ) -> Result<Option<Customer>, RepositoryError>;
}

/// Website and store enumeration.
#[async_trait]
pub trait ScopeProvider: Send + Sync {
    /// The website to use without asking, when the deployment has a single
    /// store. `None` means the operator has to choose.
    async fn single_website(&self) -> Result<Option<WebsiteId>, RepositoryError>;

    /// Every website, for the operator to choose from. A lone website is
    /// used without asking.
    async fn websites(&self) -> Result<Vec<Website>, RepositoryError>;
}
