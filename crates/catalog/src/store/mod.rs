//! Storage port for catalog entries.

mod memory;
mod sql;

use async_trait::async_trait;
use folio_core::types::DbId;
use folio_db::models::catalog_entry::{CatalogEntry, CreateCatalogEntry, UpdateCatalogEntry};

use crate::error::CatalogError;

pub use memory::MemoryCatalogStore;
pub use sql::SqlCatalogStore;

/// Durable keyed storage for catalog entries.
///
/// The store owns id assignment. Ids are unique and never change once
/// assigned.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Persist a new entry and return it with its assigned id.
    async fn insert(&self, input: &CreateCatalogEntry) -> Result<CatalogEntry, CatalogError>;

    /// Every stored entry, in insertion order.
    async fn fetch_all(&self) -> Result<Vec<CatalogEntry>, CatalogError>;

    async fn count(&self) -> Result<i64, CatalogError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<CatalogEntry>, CatalogError>;

    /// Apply a partial update. Fails with `NotFound` for an unknown id.
    async fn update(
        &self,
        id: DbId,
        input: &UpdateCatalogEntry,
    ) -> Result<CatalogEntry, CatalogError>;

    /// Remove an entry. Fails with `NotFound` for an unknown id.
    async fn delete(&self, id: DbId) -> Result<(), CatalogError>;
}
