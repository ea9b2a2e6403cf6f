//! Repository for the `catalog_entries` table.

use folio_core::types::DbId;

use crate::models::catalog_entry::{CatalogEntry, CreateCatalogEntry, UpdateCatalogEntry};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, role, date, description, technologies, url, image_url, entry_type";

/// Provides CRUD operations for catalog entries.
pub struct CatalogEntryRepo;

impl CatalogEntryRepo {
    /// Insert a new entry, returning the created row with its assigned id.
    pub async fn create(
        pool: &DbPool,
        input: &CreateCatalogEntry,
    ) -> Result<CatalogEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO catalog_entries
                (name, role, date, description, technologies, url, image_url, entry_type)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CatalogEntry>(&query)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.date)
            .bind(&input.description)
            .bind(&input.technologies)
            .bind(&input.url)
            .bind(&input.image_url)
            .bind(&input.entry_type)
            .fetch_one(pool)
            .await
    }

    /// Find an entry by its id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<CatalogEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM catalog_entries WHERE id = $1");
        sqlx::query_as::<_, CatalogEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every entry in insertion order.
    pub async fn list(pool: &DbPool) -> Result<Vec<CatalogEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM catalog_entries ORDER BY id ASC");
        sqlx::query_as::<_, CatalogEntry>(&query)
            .fetch_all(pool)
            .await
    }

    /// Number of stored entries.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM catalog_entries")
            .fetch_one(pool)
            .await
    }

    /// Update an entry. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateCatalogEntry,
    ) -> Result<Option<CatalogEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE catalog_entries SET
                name = COALESCE($2, name),
                role = COALESCE($3, role),
                date = COALESCE($4, date),
                description = COALESCE($5, description),
                technologies = COALESCE($6, technologies),
                url = COALESCE($7, url),
                image_url = COALESCE($8, image_url),
                entry_type = COALESCE($9, entry_type)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CatalogEntry>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.date)
            .bind(&input.description)
            .bind(&input.technologies)
            .bind(&input.url)
            .bind(&input.image_url)
            .bind(&input.entry_type)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an entry by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM catalog_entries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
