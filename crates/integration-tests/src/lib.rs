//! Integration tests for salesdesk.
//!
//! # Running Tests
//!
//! ```bash
//! # Point at a disposable database; the tests wipe the sales schema tables
//! export SALES_TEST_DATABASE_URL=postgres://localhost/salesdesk_test
//!
//! cargo test -p salesdesk-integration-tests -- --ignored --test-threads=1
//! ```
//!
//! # Test Categories
//!
//! - `order_email_update` - The update workflow against the `PostgreSQL` adapters

use sqlx::PgPool;

/// Connect to the test database and bring the schema up to date.
///
/// # Panics
///
/// Panics if `SALES_TEST_DATABASE_URL` is unset or the database is unreachable.
pub async fn test_pool() -> PgPool {
    let url = std::env::var("SALES_TEST_DATABASE_URL")
        .expect("SALES_TEST_DATABASE_URL must point at a disposable database");
    let pool = PgPool::connect(&url)
        .await
        .expect("Failed to connect to test database");
    salesdesk_cli::commands::migrate::apply(&pool)
        .await
        .expect("Failed to apply migrations");
    pool
}

/// Remove all rows from the sales tables and restart their sequences.
///
/// # Panics
///
/// Panics if the truncate fails.
pub async fn reset(pool: &PgPool) {
    sqlx::query(
        "TRUNCATE sales.sales_order, sales.customer, sales.store, sales.website RESTART IDENTITY CASCADE",
    )
    .execute(pool)
    .await
    .expect("Failed to reset sales tables");
}

/// Insert a website with one store view. The first website inserted becomes
/// the default, with this store as its default store view.
///
/// Returns `(website_id, store_id)`.
///
/// # Panics
///
/// Panics if an insert fails.
pub async fn seed_website(pool: &PgPool, code: &str, name: &str) -> (i32, i32) {
    let mut tx = pool.begin().await.expect("Failed to begin transaction");

    let website_id: i32 = sqlx::query_scalar(
        r"
        INSERT INTO sales.website (code, name, is_default)
        VALUES ($1, $2, NOT EXISTS (SELECT 1 FROM sales.website WHERE is_default))
        RETURNING website_id
        ",
    )
    .bind(code)
    .bind(name)
    .fetch_one(&mut *tx)
    .await
    .expect("Failed to insert website");

    let store_id: i32 = sqlx::query_scalar(
        "INSERT INTO sales.store (code, website_id, name) VALUES ($1, $2, $3) RETURNING store_id",
    )
    .bind(format!("{code}_default"))
    .bind(website_id)
    .bind(format!("{name} Store View"))
    .fetch_one(&mut *tx)
    .await
    .expect("Failed to insert store");

    sqlx::query("UPDATE sales.website SET default_store_id = $1 WHERE website_id = $2")
        .bind(store_id)
        .bind(website_id)
        .execute(&mut *tx)
        .await
        .expect("Failed to set default store");

    tx.commit().await.expect("Failed to commit website");
    (website_id, store_id)
}

/// Insert an extra store view into an existing website and return its id.
///
/// # Panics
///
/// Panics if the insert fails.
pub async fn seed_store_view(pool: &PgPool, website_id: i32, code: &str, name: &str) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO sales.store (code, website_id, name) VALUES ($1, $2, $3) RETURNING store_id",
    )
    .bind(code)
    .bind(website_id)
    .bind(name)
    .fetch_one(pool)
    .await
    .expect("Failed to insert store view")
}

/// Insert a customer account and return its id.
///
/// # Panics
///
/// Panics if the insert fails.
pub async fn seed_customer(pool: &PgPool, website_id: i32, email: &str) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO sales.customer (website_id, email) VALUES ($1, $2) RETURNING customer_id",
    )
    .bind(website_id)
    .bind(email)
    .fetch_one(pool)
    .await
    .expect("Failed to insert customer")
}

/// Insert a guest order.
///
/// # Panics
///
/// Panics if the insert fails.
pub async fn seed_guest_order(pool: &PgPool, store_id: i32, increment_id: &str, email: &str) {
    sqlx::query(
        r"
        INSERT INTO sales.sales_order (increment_id, store_id, state, customer_email)
        VALUES ($1, $2, 'processing', $3)
        ",
    )
    .bind(increment_id)
    .bind(store_id)
    .bind(email)
    .execute(pool)
    .await
    .expect("Failed to insert order");
}
