use serde::{Deserialize, Serialize};

use crate::domain::Category;

/// A named contributor with a profile, keyed by display name.
///
/// `materials_count` and `total_likes` are denormalized fields set in the
/// source data and never recomputed from the material table; only the
/// download total on the profile view is derived live. See the catalog
/// crate's `AuthorProfile` for the rendered aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    /// Display name, the primary key the material table references.
    pub name: String,
    pub avatar: String,
    pub bio: String,
    pub specialization: Category,
    /// Denormalized publication count from the source data.
    pub materials_count: u32,
    /// Denormalized like total from the source data.
    pub total_likes: u32,
    /// Month and year the author joined, display-only (e.g. "Январь 2023").
    pub joined: String,
}
