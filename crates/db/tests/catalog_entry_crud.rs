//! Integration tests for the catalog entry repository.
//!
//! Runs against an in-memory SQLite database with the real migrations:
//! - Create and id assignment
//! - Insertion-order listing and count
//! - Partial update and delete
//! - The description length constraint

use folio_db::models::catalog_entry::{CreateCatalogEntry, UpdateCatalogEntry};
use folio_db::repositories::CatalogEntryRepo;
use folio_db::DbPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn test_pool() -> DbPool {
    let pool = folio_db::create_pool("sqlite::memory:").await.unwrap();
    folio_db::run_migrations(&pool).await.unwrap();
    pool
}

fn new_entry(name: &str, entry_type: &str) -> CreateCatalogEntry {
    CreateCatalogEntry {
        name: name.to_string(),
        role: "Full-Stack Developer".to_string(),
        date: "July 2025".to_string(),
        description: format!("{name} description"),
        technologies: "Rust, SQLite".to_string(),
        url: String::new(),
        image_url: format!("/images/{name}.png"),
        entry_type: entry_type.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fresh_database_is_healthy_and_empty() {
    let pool = test_pool().await;
    folio_db::health_check(&pool).await.unwrap();
    assert_eq!(CatalogEntryRepo::count(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let pool = test_pool().await;
    folio_db::run_migrations(&pool).await.unwrap();
    assert_eq!(CatalogEntryRepo::count(&pool).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_assigns_distinct_ids() {
    let pool = test_pool().await;
    let a = CatalogEntryRepo::create(&pool, &new_entry("a", "project"))
        .await
        .unwrap();
    let b = CatalogEntryRepo::create(&pool, &new_entry("b", "project"))
        .await
        .unwrap();

    assert!(a.id > 0);
    assert_ne!(a.id, b.id);
    assert_eq!(a.name, "a");
    assert_eq!(a.url, "");
}

#[tokio::test]
async fn list_returns_insertion_order() {
    let pool = test_pool().await;
    for (name, ty) in [("first", "experience"), ("second", "project"), ("third", "other")] {
        CatalogEntryRepo::create(&pool, &new_entry(name, ty))
            .await
            .unwrap();
    }

    let names: Vec<_> = CatalogEntryRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, ["first", "second", "third"]);
    assert_eq!(CatalogEntryRepo::count(&pool).await.unwrap(), 3);
}

#[tokio::test]
async fn unknown_type_is_stored_verbatim() {
    let pool = test_pool().await;
    let created = CatalogEntryRepo::create(&pool, &new_entry("odd", "other"))
        .await
        .unwrap();
    let found = CatalogEntryRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.entry_type, "other");
}

#[tokio::test]
async fn find_missing_returns_none() {
    let pool = test_pool().await;
    assert!(CatalogEntryRepo::find_by_id(&pool, 999_999)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn duplicate_names_are_allowed() {
    let pool = test_pool().await;
    CatalogEntryRepo::create(&pool, &new_entry("same", "project"))
        .await
        .unwrap();
    CatalogEntryRepo::create(&pool, &new_entry("same", "project"))
        .await
        .unwrap();
    assert_eq!(CatalogEntryRepo::count(&pool).await.unwrap(), 2);
}

// ---------------------------------------------------------------------------
// Constraints
// ---------------------------------------------------------------------------

#[tokio::test]
async fn description_over_limit_violates_check_constraint() {
    let pool = test_pool().await;
    let mut input = new_entry("long", "project");
    input.description = "x".repeat(1001);

    let err = CatalogEntryRepo::create(&pool, &input).await.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => assert!(db_err.is_check_violation()),
        other => panic!("expected a database error, got {other:?}"),
    }
    assert_eq!(CatalogEntryRepo::count(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn description_at_limit_is_accepted() {
    let pool = test_pool().await;
    let mut input = new_entry("full", "project");
    input.description = "x".repeat(1000);
    CatalogEntryRepo::create(&pool, &input).await.unwrap();
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_changes_only_given_fields() {
    let pool = test_pool().await;
    let created = CatalogEntryRepo::create(&pool, &new_entry("orig", "project"))
        .await
        .unwrap();

    let patch = UpdateCatalogEntry {
        name: Some("renamed".to_string()),
        url: Some("https://example.com".to_string()),
        ..Default::default()
    };
    let updated = CatalogEntryRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "renamed");
    assert_eq!(updated.url, "https://example.com");
    assert_eq!(updated.role, created.role);
    assert_eq!(updated.entry_type, "project");
}

#[tokio::test]
async fn update_missing_returns_none() {
    let pool = test_pool().await;
    let result = CatalogEntryRepo::update(&pool, 42, &UpdateCatalogEntry::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn delete_removes_row_once() {
    let pool = test_pool().await;
    let created = CatalogEntryRepo::create(&pool, &new_entry("gone", "project"))
        .await
        .unwrap();

    assert!(CatalogEntryRepo::delete(&pool, created.id).await.unwrap());
    assert!(!CatalogEntryRepo::delete(&pool, created.id).await.unwrap());
    assert_eq!(CatalogEntryRepo::count(&pool).await.unwrap(), 0);
}
