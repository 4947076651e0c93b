//! Customer account lookups.

use async_trait::async_trait;
use sqlx::PgPool;

use salesdesk_core::{Customer, CustomerId, Email, WebsiteId};

use super::RepositoryError;
use crate::workflow::CustomerResolver;

/// Internal row type for customer queries.
#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    customer_id: i32,
    website_id: i32,
    email: String,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = RepositoryError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!(
                "invalid email for customer {}: {e}",
                row.customer_id
            ))
        })?;

        Ok(Self {
            id: CustomerId::new(row.customer_id),
            email,
            website_id: WebsiteId::new(row.website_id),
        })
    }
}

/// Repository for customer account lookups.
pub struct CustomerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find the customer registered with `email` on `website`.
    ///
    /// Emails compare case-insensitively, matching the unique index.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn find_by_email(
        &self,
        email: &Email,
        website: WebsiteId,
    ) -> Result<Option<Customer>, RepositoryError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r"
            SELECT customer_id, website_id, email
            FROM sales.customer
            WHERE lower(email) = lower($1) AND website_id = $2
            ",
        )
        .bind(email)
        .bind(website)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }
}

#[async_trait]
impl CustomerResolver for CustomerRepository<'_> {
    async fn find_by_email(
        &self,
        email: &Email,
        website: WebsiteId,
    ) -> Result<Option<Customer>, RepositoryError> {
        Self::find_by_email(self, email, website).await
    }
}
