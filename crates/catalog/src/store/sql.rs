use async_trait::async_trait;
use folio_core::types::DbId;
use folio_db::models::catalog_entry::{CatalogEntry, CreateCatalogEntry, UpdateCatalogEntry};
use folio_db::repositories::CatalogEntryRepo;
use folio_db::DbPool;

use super::CatalogStore;
use crate::error::CatalogError;

/// [`CatalogStore`] backed by the `catalog_entries` table.
#[derive(Clone, Debug)]
pub struct SqlCatalogStore {
    pool: DbPool,
}

impl SqlCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for SqlCatalogStore {
    async fn insert(&self, input: &CreateCatalogEntry) -> Result<CatalogEntry, CatalogError> {
        Ok(CatalogEntryRepo::create(&self.pool, input).await?)
    }

    async fn fetch_all(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        Ok(CatalogEntryRepo::list(&self.pool).await?)
    }

    async fn count(&self) -> Result<i64, CatalogError> {
        Ok(CatalogEntryRepo::count(&self.pool).await?)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<CatalogEntry>, CatalogError> {
        Ok(CatalogEntryRepo::find_by_id(&self.pool, id).await?)
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateCatalogEntry,
    ) -> Result<CatalogEntry, CatalogError> {
        CatalogEntryRepo::update(&self.pool, id, input)
            .await?
            .ok_or_else(|| CatalogError::not_found(id))
    }

    async fn delete(&self, id: DbId) -> Result<(), CatalogError> {
        if CatalogEntryRepo::delete(&self.pool, id).await? {
            Ok(())
        } else {
            Err(CatalogError::not_found(id))
        }
    }
}
