use std::sync::Arc;

use folio_catalog::CatalogService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Project and experience catalog, already seeded.
    pub catalog: CatalogService,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
