//! Project and experience catalog.
//!
//! - [`store::CatalogStore`] -- storage port, with SQL and in-memory adapters.
//! - [`service::CatalogService`] -- startup seeding, reads, writes, and the
//!   project/experience split used by the listing page.
//! - [`seed`] -- the fixed entries written into an empty store.

pub mod error;
pub mod seed;
pub mod service;
pub mod store;

pub use error::CatalogError;
pub use service::{CatalogService, SeedOutcome};
pub use store::{CatalogStore, MemoryCatalogStore, SqlCatalogStore};
