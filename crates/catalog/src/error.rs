use folio_core::catalog::ENTITY_NAME;
use folio_core::error::CoreError;
use folio_core::types::DbId;

/// Errors surfaced by catalog stores and the catalog service.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A domain-level error (missing entry, rejected field value).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The backing store is unreachable or a write failed.
    #[error("Storage fault: {0}")]
    StorageFault(#[source] sqlx::Error),
}

impl CatalogError {
    pub fn not_found(id: DbId) -> Self {
        Self::Core(CoreError::NotFound {
            entity: ENTITY_NAME,
            id,
        })
    }
}

/// Constraint violations are caller mistakes, not storage faults.
impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_check_violation() {
                return Self::Core(CoreError::Validation(db_err.message().to_string()));
            }
        }
        Self::StorageFault(err)
    }
}
