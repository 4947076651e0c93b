//! Sales order repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use salesdesk_core::{CustomerId, IncrementId, Order, OrderId, OrderState, StoreId, WebsiteId};

use super::RepositoryError;
use crate::workflow::{OrderFilter, OrderFinder, OrderWriter};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for order queries.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    entity_id: i32,
    increment_id: String,
    store_id: i32,
    website_id: i32,
    state: String,
    customer_email: String,
    customer_id: Option<i32>,
    customer_is_guest: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepositoryError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let increment_id = IncrementId::parse(&row.increment_id).map_err(|e| {
            RepositoryError::DataCorruption(format!(
                "invalid increment id {:?} on order {}: {e}",
                row.increment_id, row.entity_id
            ))
        })?;
        let state: OrderState = row
            .state
            .parse()
            .map_err(|e| RepositoryError::DataCorruption(format!("order {increment_id}: {e}")))?;

        Ok(Self {
            id: OrderId::new(row.entity_id),
            increment_id,
            store_id: StoreId::new(row.store_id),
            website_id: WebsiteId::new(row.website_id),
            state,
            customer_email: row.customer_email,
            customer_id: row.customer_id.map(CustomerId::new),
            customer_is_guest: row.customer_is_guest,
            created_at: row.created_at,
        })
    }
}

const SELECT_ORDERS: &str = r"
    SELECT o.entity_id, o.increment_id, o.store_id, s.website_id, o.state,
           o.customer_email, o.customer_id, o.customer_is_guest, o.created_at
    FROM sales.sales_order o
    JOIN sales.store s ON s.store_id = o.store_id
";

// =============================================================================
// Repository
// =============================================================================

/// Repository for sales order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Orders with the given increment id (at most one, the column is unique).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a row is invalid.
    pub async fn find_by_increment_id(
        &self,
        increment_id: &IncrementId,
    ) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "{SELECT_ORDERS} WHERE o.increment_id = $1 ORDER BY o.entity_id"
        ))
        .bind(increment_id)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Orders whose stored customer email equals `email` exactly.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a row is invalid.
    pub async fn find_by_customer_email(&self, email: &str) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "{SELECT_ORDERS} WHERE o.customer_email = $1 ORDER BY o.entity_id"
        ))
        .bind(email)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Write back the contact email and customer linkage of an order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row has the order's id.
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update_contact(&self, order: &Order) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE sales.sales_order
            SET customer_email = $2,
                customer_id = $3,
                customer_is_guest = $4,
                updated_at = NOW()
            WHERE entity_id = $1
            ",
        )
        .bind(order.id)
        .bind(&order.customer_email)
        .bind(order.customer_id)
        .bind(order.customer_is_guest)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl OrderFinder for OrderRepository<'_> {
    async fn find_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>, RepositoryError> {
        match filter {
            OrderFilter::IncrementId(increment_id) => self.find_by_increment_id(increment_id).await,
            OrderFilter::CustomerEmail(email) => self.find_by_customer_email(email).await,
        }
    }
}

#[async_trait]
impl OrderWriter for OrderRepository<'_> {
    async fn save_order(&self, order: &Order) -> Result<(), RepositoryError> {
        self.update_contact(order).await?;
        tracing::debug!(increment_id = %order.increment_id, "Order contact saved");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn row() -> OrderRow {
        OrderRow {
            entity_id: 50,
            increment_id: "100000050".to_owned(),
            store_id: 1,
            website_id: 1,
            state: "processing".to_owned(),
            customer_email: "not an email".to_owned(),
            customer_id: None,
            customer_is_guest: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_conversion_keeps_malformed_email() {
        let order = Order::try_from(row()).unwrap();
        assert_eq!(order.increment_id.as_str(), "100000050");
        assert_eq!(order.customer_email, "not an email");
        assert_eq!(order.state, OrderState::Processing);
    }

    #[test]
    fn test_row_conversion_rejects_unknown_state() {
        let mut row = row();
        row.state = "teleported".to_owned();
        assert!(matches!(
            Order::try_from(row),
            Err(RepositoryError::DataCorruption(_))
        ));
    }

    #[test]
    fn test_row_conversion_rejects_bad_increment_id() {
        let mut row = row();
        row.increment_id = "ABC-1".to_owned();
        assert!(matches!(
            Order::try_from(row),
            Err(RepositoryError::DataCorruption(_))
        ));
    }
}
