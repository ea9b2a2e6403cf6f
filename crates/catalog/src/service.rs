//! Catalog service: seeding, reads, writes, and the listing-page split.

use std::sync::Arc;

use folio_core::catalog::{partition_by_type, Partition};
use folio_core::types::DbId;
use folio_db::models::catalog_entry::{CatalogEntry, CreateCatalogEntry, UpdateCatalogEntry};

use crate::error::CatalogError;
use crate::seed::seed_entries;
use crate::store::CatalogStore;

/// Result of [`CatalogService::seed_if_empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store was empty; this many seed entries were inserted.
    Seeded(usize),
    /// The store already held this many entries; nothing was inserted.
    AlreadyPopulated(i64),
}

/// Entry point for everything the web layer does with the catalog.
///
/// Cheap to clone; all clones share the same store.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Insert the default entries if, and only if, the store is empty.
    ///
    /// Must complete before the server accepts traffic. Safe to call on every
    /// start. Inserts run one by one with no enclosing transaction: the first
    /// failure is returned immediately and earlier inserts are kept.
    pub async fn seed_if_empty(&self) -> Result<SeedOutcome, CatalogError> {
        let existing = self.store.count().await?;
        if existing != 0 {
            tracing::debug!(existing, "Catalog already populated, skipping seed");
            return Ok(SeedOutcome::AlreadyPopulated(existing));
        }

        let seeds = seed_entries();
        for input in &seeds {
            let entry = self.store.insert(input).await?;
            tracing::debug!(id = entry.id, name = %entry.name, "Inserted seed entry");
        }

        tracing::info!(inserted = seeds.len(), "Seeded empty catalog");
        Ok(SeedOutcome::Seeded(seeds.len()))
    }

    /// Every entry in insertion order, unfiltered.
    pub async fn get_all(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        self.store.fetch_all().await
    }

    pub async fn get(&self, id: DbId) -> Result<CatalogEntry, CatalogError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found(id))
    }

    pub async fn count(&self) -> Result<i64, CatalogError> {
        self.store.count().await
    }

    /// Split entries into projects and experiences for display.
    ///
    /// Pure; entries with an unrecognized `type` appear in neither list.
    pub fn partition_by_type(entries: &[CatalogEntry]) -> Partition<CatalogEntry> {
        partition_by_type(entries.iter().cloned(), |e| e.entry_type.as_str())
    }

    pub async fn create(&self, input: CreateCatalogEntry) -> Result<CatalogEntry, CatalogError> {
        let entry = self.store.insert(&input).await?;
        tracing::info!(id = entry.id, entry_type = %entry.entry_type, "Created catalog entry");
        Ok(entry)
    }

    pub async fn update(
        &self,
        id: DbId,
        input: UpdateCatalogEntry,
    ) -> Result<CatalogEntry, CatalogError> {
        let entry = self.store.update(id, &input).await?;
        tracing::info!(id, "Updated catalog entry");
        Ok(entry)
    }

    pub async fn delete(&self, id: DbId) -> Result<(), CatalogError> {
        self.store.delete(id).await?;
        tracing::info!(id, "Deleted catalog entry");
        Ok(())
    }
}
