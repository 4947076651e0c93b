//! Integration tests for the order email update against `PostgreSQL`.
//!
//! These tests require:
//! - A disposable `PostgreSQL` database in `SALES_TEST_DATABASE_URL`
//!
//! Run with: cargo test -p salesdesk-integration-tests -- --ignored --test-threads=1

#![allow(clippy::unwrap_used)]

use std::io::Cursor;

use sqlx::PgPool;

use salesdesk_cli::db::{CustomerRepository, OrderRepository, StoreRepository};
use salesdesk_cli::prompt::TerminalPrompter;
use salesdesk_cli::workflow::{OrderEmailUpdate, OrderSelector, Outcome, UpdateEmailError};
use salesdesk_core::IncrementId;
use salesdesk_integration_tests::{
    reset, seed_customer, seed_guest_order, seed_store_view, seed_website, test_pool,
};

/// Run the workflow against the database with scripted answers.
async fn run(
    pool: &PgPool,
    single_store_mode: bool,
    selector: &OrderSelector,
    answers: &[&str],
) -> (Result<Outcome, UpdateEmailError>, String) {
    let orders = OrderRepository::new(pool);
    let customers = CustomerRepository::new(pool);
    let stores = StoreRepository::new(pool, single_store_mode);
    let workflow = OrderEmailUpdate::new(&orders, &orders, &customers, &stores);

    let input: String = answers.iter().map(|answer| format!("{answer}\n")).collect();
    let mut prompter = TerminalPrompter::new(Cursor::new(input.into_bytes()), Vec::new());
    let result = workflow.run(selector, &mut prompter).await;

    (result, String::from_utf8(prompter.into_writer()).unwrap())
}

/// Current `(customer_email, customer_id, customer_is_guest)` of an order.
async fn contact(pool: &PgPool, increment_id: &str) -> (String, Option<i32>, bool) {
    sqlx::query_as(
        "SELECT customer_email, customer_id, customer_is_guest FROM sales.sales_order WHERE increment_id = $1",
    )
    .bind(increment_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

// ============================================================================
// Lookups
// ============================================================================

#[tokio::test]
#[ignore = "Requires PostgreSQL in SALES_TEST_DATABASE_URL"]
async fn test_unknown_increment_id_is_not_found() {
    let pool = test_pool().await;
    reset(&pool).await;
    let (_, store) = seed_website(&pool, "base", "Main Website").await;
    seed_guest_order(&pool, store, "100000001", "old@example.com").await;

    let selector = OrderSelector::IncrementId(IncrementId::parse("100000123").unwrap());
    let (result, _) = run(&pool, false, &selector, &["new@example.com", "y"]).await;

    assert_eq!(
        result.unwrap_err().to_string(),
        "Couldn't find the order with ID #100000123"
    );
    assert_eq!(contact(&pool, "100000001").await.0, "old@example.com");
}

// ============================================================================
// Updates
// ============================================================================

#[tokio::test]
#[ignore = "Requires PostgreSQL in SALES_TEST_DATABASE_URL"]
async fn test_email_selector_updates_all_matching_orders() {
    let pool = test_pool().await;
    reset(&pool).await;
    let (_, store) = seed_website(&pool, "base", "Main Website").await;
    seed_guest_order(&pool, store, "100000050", "old@example.com").await;
    seed_guest_order(&pool, store, "100000051", "old@example.com").await;
    seed_guest_order(&pool, store, "100000052", "other@example.com").await;

    let selector = OrderSelector::Email("old@example.com".to_owned());
    let (result, transcript) = run(&pool, false, &selector, &["new@example.com", "y"]).await;

    let Outcome::Committed(report) = result.unwrap() else {
        panic!("expected the update to commit");
    };
    let updated: Vec<&str> = report.updated.iter().map(IncrementId::as_str).collect();
    assert_eq!(updated, ["100000050", "100000051"]);
    assert!(transcript.contains("Updated #100000050\nUpdated #100000051\n"));

    assert_eq!(
        contact(&pool, "100000050").await,
        ("new@example.com".to_owned(), None, true)
    );
    assert_eq!(
        contact(&pool, "100000051").await,
        ("new@example.com".to_owned(), None, true)
    );
    assert_eq!(contact(&pool, "100000052").await.0, "other@example.com");
}

#[tokio::test]
#[ignore = "Requires PostgreSQL in SALES_TEST_DATABASE_URL"]
async fn test_relink_to_customer_in_chosen_website() {
    let pool = test_pool().await;
    reset(&pool).await;
    let (main, _) = seed_website(&pool, "base", "Main Website").await;
    let (wholesale, wholesale_store) = seed_website(&pool, "wholesale", "Wholesale").await;
    seed_customer(&pool, main, "buyer@example.com").await;
    let customer = seed_customer(&pool, wholesale, "Buyer@Example.com").await;
    seed_guest_order(&pool, wholesale_store, "200000001", "typo@exmaple.com").await;

    let selector = OrderSelector::IncrementId(IncrementId::parse("200000001").unwrap());
    let website_answer = wholesale.to_string();
    let answers = [website_answer.as_str(), "buyer@example.com", "y", "y"];
    let (result, transcript) = run(&pool, false, &selector, &answers).await;

    assert!(matches!(result.unwrap(), Outcome::Committed(_)));
    assert!(transcript.contains("Wholesale"));
    assert_eq!(
        contact(&pool, "200000001").await,
        ("buyer@example.com".to_owned(), Some(customer), false)
    );
}

#[tokio::test]
#[ignore = "Requires PostgreSQL in SALES_TEST_DATABASE_URL"]
async fn test_single_store_mode_skips_website_prompt() {
    let pool = test_pool().await;
    reset(&pool).await;
    let (_, store) = seed_website(&pool, "base", "Main Website").await;
    seed_website(&pool, "wholesale", "Wholesale").await;
    seed_guest_order(&pool, store, "100000001", "old@example.com").await;

    let selector = OrderSelector::IncrementId(IncrementId::parse("100000001").unwrap());
    let (result, transcript) = run(&pool, true, &selector, &["new@example.com", "n"]).await;

    assert_eq!(result.unwrap(), Outcome::Cancelled);
    assert!(!transcript.contains("Please select a Website scope"));
    assert_eq!(contact(&pool, "100000001").await.0, "old@example.com");
}

#[tokio::test]
#[ignore = "Requires PostgreSQL in SALES_TEST_DATABASE_URL"]
async fn test_only_website_with_several_store_views_skips_website_prompt() {
    let pool = test_pool().await;
    reset(&pool).await;
    let (website, store) = seed_website(&pool, "base", "Main Website").await;
    let french = seed_store_view(&pool, website, "base_fr", "French Store View").await;
    seed_guest_order(&pool, store, "100000001", "old@example.com").await;
    seed_guest_order(&pool, french, "100000002", "old@example.com").await;

    let selector = OrderSelector::Email("old@example.com".to_owned());
    let (result, transcript) = run(&pool, false, &selector, &["new@example.com", "y"]).await;

    assert!(matches!(result.unwrap(), Outcome::Committed(_)));
    assert!(!transcript.contains("Please select a Website scope"));
    assert_eq!(contact(&pool, "100000001").await.0, "new@example.com");
    assert_eq!(contact(&pool, "100000002").await.0, "new@example.com");
}
