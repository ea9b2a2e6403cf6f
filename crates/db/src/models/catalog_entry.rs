//! Catalog entry model and DTOs.

use folio_core::catalog::{split_technologies, EntryKind};
use folio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `catalog_entries` table: a project or an experience record.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: DbId,
    /// Project name, or employer/position title for experiences.
    pub name: String,
    pub role: String,
    /// Free-form period such as "Summer 2024". Never parsed.
    pub date: String,
    pub description: String,
    /// Comma-separated list, stored exactly as entered.
    pub technologies: String,
    /// External link. Empty string when there is none.
    pub url: String,
    pub image_url: String,
    #[serde(rename = "type")]
    pub entry_type: String,
}

impl CatalogEntry {
    /// The recognized kind of this entry, or `None` for an unknown tag.
    pub fn kind(&self) -> Option<EntryKind> {
        EntryKind::from_tag(&self.entry_type)
    }

    /// Technologies split for display.
    pub fn technology_list(&self) -> Vec<&str> {
        split_technologies(&self.technologies)
    }
}

/// DTO for creating a new catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCatalogEntry {
    pub name: String,
    pub role: String,
    pub date: String,
    pub description: String,
    pub technologies: String,
    /// Defaults to the empty string if omitted.
    #[serde(default)]
    pub url: String,
    pub image_url: String,
    #[serde(rename = "type")]
    pub entry_type: String,
}

impl CreateCatalogEntry {
    /// Build the stored form of this DTO under the given id.
    pub fn into_entry(self, id: DbId) -> CatalogEntry {
        CatalogEntry {
            id,
            name: self.name,
            role: self.role,
            date: self.date,
            description: self.description,
            technologies: self.technologies,
            url: self.url,
            image_url: self.image_url,
            entry_type: self.entry_type,
        }
    }
}

/// DTO for updating an existing catalog entry. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCatalogEntry {
    pub name: Option<String>,
    pub role: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
}

impl UpdateCatalogEntry {
    /// Apply every `Some` field to `entry`, leaving the rest untouched.
    pub fn apply_to(&self, entry: &mut CatalogEntry) {
        fn set(target: &mut String, value: &Option<String>) {
            if let Some(v) = value {
                target.clone_from(v);
            }
        }

        set(&mut entry.name, &self.name);
        set(&mut entry.role, &self.role);
        set(&mut entry.date, &self.date);
        set(&mut entry.description, &self.description);
        set(&mut entry.technologies, &self.technologies);
        set(&mut entry.url, &self.url);
        set(&mut entry.image_url, &self.image_url);
        set(&mut entry.entry_type, &self.entry_type);
    }
}
