use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::Category;

/// Identifier of a material row. Unique within the catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MaterialId(pub u32);

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One catalog entry: a shareable teaching resource.
///
/// Immutable after load. `author` references an [`crate::Author`] record by
/// display name; the catalog validates that reference when it loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub id: MaterialId,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Author display name, the foreign key into the author table.
    pub author: String,
    pub author_avatar: String,
    /// Publication date; the long Russian form shown in the UI is derived
    /// from this at render time.
    pub published: NaiveDate,
    pub likes: u32,
    /// Denormalized comment counter carried on the source row. Independent
    /// of the actual comment table, by design of the source data.
    pub comment_count: u32,
    pub downloads: u32,
}

impl Material {
    /// Case-insensitive substring match against title or description.
    ///
    /// An empty needle matches everything. Uses Unicode lowercasing so
    /// Cyrillic queries fold case correctly.
    pub fn matches_search(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}
