//! Domain types and pure logic shared by every folio crate.
//!
//! Nothing in here touches the database or the network.

pub mod catalog;
pub mod error;
pub mod types;
