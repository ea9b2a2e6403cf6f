//! Catalog entry tags and the display-time partition rule.
//!
//! A catalog entry is either a personal project or a work-experience record.
//! Both live in one table and are told apart by a free-form `type` tag. Only
//! the two tags below are recognized; anything else is kept in storage but
//! never shown in either section of the listing page.

use serde::Serialize;

use crate::error::CoreError;

/// Tag for personal and academic projects.
pub const ENTRY_TYPE_PROJECT: &str = "project";

/// Tag for work-experience records.
pub const ENTRY_TYPE_EXPERIENCE: &str = "experience";

/// Column length limit for `description`, counted in characters.
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Entity name used in [`CoreError::NotFound`] for catalog entries.
pub const ENTITY_NAME: &str = "CatalogEntry";

/// The two recognized entry kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Project,
    Experience,
}

impl EntryKind {
    /// Parse a stored tag. Matching is exact and case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            ENTRY_TYPE_PROJECT => Some(Self::Project),
            ENTRY_TYPE_EXPERIENCE => Some(Self::Experience),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Project => ENTRY_TYPE_PROJECT,
            Self::Experience => ENTRY_TYPE_EXPERIENCE,
        }
    }
}

/// Entries split by kind, each list in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Partition<T> {
    pub projects: Vec<T>,
    pub experiences: Vec<T>,
}

/// Split `entries` into projects and experiences using `tag` to read each
/// entry's type.
///
/// Relative order is preserved inside each list. Entries whose tag is not
/// recognized land in neither list; they are not treated as projects.
///
/// # Examples
///
/// ```
/// use folio_core::catalog::partition_by_type;
///
/// let split = partition_by_type(["project", "other", "experience"], |t| *t);
/// assert_eq!(split.projects, vec!["project"]);
/// assert_eq!(split.experiences, vec!["experience"]);
/// ```
pub fn partition_by_type<T, F>(entries: impl IntoIterator<Item = T>, tag: F) -> Partition<T>
where
    F: Fn(&T) -> &str,
{
    let mut projects = Vec::new();
    let mut experiences = Vec::new();

    for entry in entries {
        match EntryKind::from_tag(tag(&entry)) {
            Some(EntryKind::Project) => projects.push(entry),
            Some(EntryKind::Experience) => experiences.push(entry),
            None => {}
        }
    }

    Partition {
        projects,
        experiences,
    }
}

/// Split a comma-separated technology list into trimmed, non-empty items.
pub fn split_technologies(technologies: &str) -> Vec<&str> {
    technologies
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Reject descriptions longer than [`MAX_DESCRIPTION_LEN`] characters.
pub fn check_description(description: &str) -> Result<(), CoreError> {
    let len = description.chars().count();
    if len > MAX_DESCRIPTION_LEN {
        return Err(CoreError::Validation(format!(
            "description is {len} characters, maximum is {MAX_DESCRIPTION_LEN}"
        )));
    }
    Ok(())
}
