//! Website and store view lookups.

use async_trait::async_trait;
use sqlx::PgPool;

use salesdesk_core::{Website, WebsiteId};

use super::RepositoryError;
use crate::workflow::ScopeProvider;

/// Internal row type for website queries.
#[derive(Debug, sqlx::FromRow)]
struct WebsiteRow {
    website_id: i32,
    name: String,
}

impl From<WebsiteRow> for Website {
    fn from(row: WebsiteRow) -> Self {
        Self {
            id: WebsiteId::new(row.website_id),
            name: row.name,
        }
    }
}

/// Repository for websites and store views.
pub struct StoreRepository<'a> {
    pool: &'a PgPool,
    single_store_mode: bool,
}

impl<'a> StoreRepository<'a> {
    /// Create a new store repository.
    ///
    /// `single_store_mode` forces single-website behaviour even when more
    /// than one store view exists.
    #[must_use]
    pub const fn new(pool: &'a PgPool, single_store_mode: bool) -> Self {
        Self {
            pool,
            single_store_mode,
        }
    }

    /// Number of store views.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count_stores(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sales.store")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// Website of the default website's default store view.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no default store view is configured.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn default_store_website(&self) -> Result<WebsiteId, RepositoryError> {
        let website_id = sqlx::query_scalar::<_, i32>(
            r"
            SELECT s.website_id
            FROM sales.website w
            JOIN sales.store s ON s.store_id = w.default_store_id
            WHERE w.is_default
            ",
        )
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(WebsiteId::new(website_id))
    }

    /// All websites ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_websites(&self) -> Result<Vec<Website>, RepositoryError> {
        let rows = sqlx::query_as::<_, WebsiteRow>(
            "SELECT website_id, name FROM sales.website ORDER BY website_id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl ScopeProvider for StoreRepository<'_> {
    async fn single_website(&self) -> Result<Option<WebsiteId>, RepositoryError> {
        if !self.single_store_mode && self.count_stores().await? != 1 {
            return Ok(None);
        }
        self.default_store_website().await.map(Some)
    }

    async fn websites(&self) -> Result<Vec<Website>, RepositoryError> {
        self.list_websites().await
    }
}
