use async_trait::async_trait;
use folio_core::catalog::check_description;
use folio_core::types::DbId;
use folio_db::models::catalog_entry::{CatalogEntry, CreateCatalogEntry, UpdateCatalogEntry};
use tokio::sync::RwLock;

use super::CatalogStore;
use crate::error::CatalogError;

/// [`CatalogStore`] kept entirely in process memory.
///
/// Applies the same description length limit as the SQL schema so both
/// adapters reject the same input.
#[derive(Debug)]
pub struct MemoryCatalogStore {
    table: RwLock<Table>,
}

#[derive(Debug)]
struct Table {
    rows: Vec<CatalogEntry>,
    next_id: DbId,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn insert(&self, input: &CreateCatalogEntry) -> Result<CatalogEntry, CatalogError> {
        check_description(&input.description)?;

        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let entry = input.clone().into_entry(id);
        table.rows.push(entry.clone());
        Ok(entry)
    }

    async fn fetch_all(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn count(&self) -> Result<i64, CatalogError> {
        Ok(self.table.read().await.rows.len() as i64)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<CatalogEntry>, CatalogError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|e| e.id == id).cloned())
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateCatalogEntry,
    ) -> Result<CatalogEntry, CatalogError> {
        if let Some(description) = &input.description {
            check_description(description)?;
        }

        let mut table = self.table.write().await;
        let entry = table
            .rows
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| CatalogError::not_found(id))?;
        input.apply_to(entry);
        Ok(entry.clone())
    }

    async fn delete(&self, id: DbId) -> Result<(), CatalogError> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|e| e.id != id);
        if table.rows.len() == before {
            return Err(CatalogError::not_found(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use folio_core::error::CoreError;

    use super::*;

    fn entry(name: &str) -> CreateCatalogEntry {
        CreateCatalogEntry {
            name: name.to_string(),
            role: "role".to_string(),
            date: "2025".to_string(),
            description: "desc".to_string(),
            technologies: "Rust".to_string(),
            url: String::new(),
            image_url: "/images/x.png".to_string(),
            entry_type: "project".to_string(),
        }
    }

    #[tokio::test]
    async fn ids_are_never_reused_after_delete() {
        let store = MemoryCatalogStore::new();
        let a = store.insert(&entry("a")).await.unwrap();
        store.delete(a.id).await.unwrap();
        let b = store.insert(&entry("b")).await.unwrap();
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn rejects_long_description_on_insert_and_update() {
        let store = MemoryCatalogStore::new();
        let mut long = entry("long");
        long.description = "x".repeat(1001);
        assert_matches!(
            store.insert(&long).await,
            Err(CatalogError::Core(CoreError::Validation(_)))
        );

        let ok = store.insert(&entry("ok")).await.unwrap();
        let patch = UpdateCatalogEntry {
            description: Some("x".repeat(1001)),
            ..Default::default()
        };
        assert_matches!(
            store.update(ok.id, &patch).await,
            Err(CatalogError::Core(CoreError::Validation(_)))
        );
        assert_eq!(store.find_by_id(ok.id).await.unwrap().unwrap().description, "desc");
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let store = MemoryCatalogStore::new();
        assert_matches!(
            store.delete(5).await,
            Err(CatalogError::Core(CoreError::NotFound { id: 5, .. }))
        );
    }
}
