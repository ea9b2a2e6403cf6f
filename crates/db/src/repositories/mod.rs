//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument.

pub mod catalog_entry_repo;

pub use catalog_entry_repo::CatalogEntryRepo;
