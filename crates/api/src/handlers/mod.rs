//! Request handlers.
//!
//! - [`pages`] -- page models for the site's static and listing pages.
//! - [`catalog`] -- JSON CRUD for catalog entries, delegating to
//!   [`CatalogService`](folio_catalog::CatalogService) and mapping errors via
//!   [`AppError`](crate::error::AppError).

pub mod catalog;
pub mod pages;
