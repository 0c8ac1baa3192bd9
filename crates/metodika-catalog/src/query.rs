//! Pure derivations over the catalog tables: the filtered/sorted material
//! list, per-material comment threads, and author profile aggregates.

use chrono::NaiveDate;
use metodika_model::{Author, CategoryFilter, Comment, Material, MaterialId, SortKey};

use crate::catalog::{Catalog, PLACEHOLDER_AVATAR, SELF_AUTHOR};

/// An author record joined with that author's materials.
///
/// `total_downloads` is computed live from the material table every time the
/// profile is derived. `author.materials_count` and `author.total_likes` stay
/// the static denormalized values from the source data and are rendered
/// as-is; the asymmetry is intentional and mirrors the source system.
#[derive(Debug)]
pub struct AuthorProfile<'a> {
    pub author: &'a Author,
    pub materials: Vec<&'a Material>,
    pub total_downloads: u64,
}

impl Catalog {
    /// Derive the catalog list: filter by search query and category, then
    /// order descending by the sort key.
    ///
    /// The whole filtered set is returned on every call; there is no
    /// pagination. An empty query matches everything. Ties keep table order
    /// (the sort is stable, which is all the contract asks).
    pub fn filter_materials(
        &self,
        query: &str,
        filter: CategoryFilter,
        sort: SortKey,
    ) -> Vec<&Material> {
        let mut results: Vec<&Material> = self
            .materials
            .iter()
            .filter(|m| filter.matches(m.category) && m.matches_search(query))
            .collect();

        results.sort_by(|a, b| match sort {
            SortKey::Date => b.published.cmp(&a.published),
            SortKey::Likes => b.likes.cmp(&a.likes),
            SortKey::Downloads => b.downloads.cmp(&a.downloads),
            SortKey::Comments => b.comment_count.cmp(&a.comment_count),
        });

        tracing::debug!(
            query,
            filter = %filter,
            matched = results.len(),
            "filtered catalog"
        );
        results
    }

    /// Comments attached to one material, in table insertion order.
    pub fn comments_for(&self, material_id: MaterialId) -> Vec<&Comment> {
        self.comments
            .iter()
            .filter(|c| c.material_id == material_id)
            .collect()
    }

    /// Append a comment posted from this session.
    ///
    /// A draft that is empty after trimming is rejected as a silent no-op.
    /// The stored text keeps the draft verbatim; only the emptiness check
    /// trims. The id is assigned as `table length + 1`, which is unique only
    /// within this session. Returns the appended comment.
    pub fn add_comment(
        &mut self,
        material_id: MaterialId,
        draft: &str,
        today: NaiveDate,
    ) -> Option<&Comment> {
        if draft.trim().is_empty() {
            return None;
        }
        if self.material(material_id).is_none() {
            tracing::warn!(%material_id, "comment for unknown material dropped");
            return None;
        }

        let comment = Comment {
            id: self.comments.len() as u32 + 1,
            material_id,
            author: SELF_AUTHOR.to_string(),
            author_avatar: PLACEHOLDER_AVATAR.to_string(),
            text: draft.to_string(),
            posted: today,
        };
        tracing::debug!(id = comment.id, %material_id, "comment appended");
        self.comments.push(comment);
        self.comments.last()
    }

    /// Join an author record with their materials and the live download sum.
    ///
    /// Exact string match on the display name, the same rule the material
    /// list uses, so a profile and its material list can never disagree.
    /// Returns `None` for a name without a profile record; load-time
    /// validation keeps that from happening with the shipped tables.
    pub fn author_profile(&self, name: &str) -> Option<AuthorProfile<'_>> {
        let author = self.authors.get(name)?;
        let materials: Vec<&Material> = self
            .materials
            .iter()
            .filter(|m| m.author == author.name)
            .collect();
        let total_downloads = materials.iter().map(|m| u64::from(m.downloads)).sum();

        Some(AuthorProfile {
            author,
            materials,
            total_downloads,
        })
    }
}
