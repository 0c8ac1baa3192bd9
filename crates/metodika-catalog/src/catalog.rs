//! The in-memory catalog: three relational-like tables loaded once at startup.
//!
//! `Catalog::load` parses the embedded seed tables and validates referential
//! integrity before anything renders, so a material can never reference an
//! author without a profile record at runtime.

use std::collections::{BTreeMap, BTreeSet};

use metodika_model::{Author, Comment, Material, MaterialId};

use crate::error::{CatalogError, Result};

const MATERIALS_JSON: &str = include_str!("../assets/materials.json");
const COMMENTS_JSON: &str = include_str!("../assets/comments.json");
const AUTHORS_JSON: &str = include_str!("../assets/authors.json");

/// Author identity used for comments posted from this session.
pub const SELF_AUTHOR: &str = "Вы";

/// Avatar path used for records without a real image.
pub const PLACEHOLDER_AVATAR: &str = "/placeholder.svg";

/// Owns the material, comment and author tables for one session.
///
/// Materials and authors are immutable after load; the comment table is
/// append-only. All access is through one owner on the UI thread, so there
/// is no interior mutability and no locking.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) materials: Vec<Material>,
    pub(crate) comments: Vec<Comment>,
    pub(crate) authors: BTreeMap<String, Author>,
}

impl Catalog {
    /// Parse and validate the embedded seed tables.
    pub fn load() -> Result<Self> {
        let materials: Vec<Material> =
            serde_json::from_str(MATERIALS_JSON).map_err(|source| CatalogError::Parse {
                table: "materials",
                source,
            })?;
        let comments: Vec<Comment> =
            serde_json::from_str(COMMENTS_JSON).map_err(|source| CatalogError::Parse {
                table: "comments",
                source,
            })?;
        let authors: Vec<Author> =
            serde_json::from_str(AUTHORS_JSON).map_err(|source| CatalogError::Parse {
                table: "authors",
                source,
            })?;

        let catalog = Self::from_tables(materials, comments, authors)?;
        tracing::info!(
            materials = catalog.materials.len(),
            comments = catalog.comments.len(),
            authors = catalog.authors.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Build a catalog from already-parsed tables, validating integrity.
    ///
    /// Checks, in order: duplicate material ids, duplicate author names,
    /// duplicate comment ids, comment -> material references, and
    /// material.author -> author-record references.
    pub fn from_tables(
        materials: Vec<Material>,
        comments: Vec<Comment>,
        authors: Vec<Author>,
    ) -> Result<Self> {
        let mut seen_materials = BTreeSet::new();
        for material in &materials {
            if !seen_materials.insert(material.id) {
                return Err(CatalogError::DuplicateMaterialId { id: material.id });
            }
        }

        let mut author_table = BTreeMap::new();
        for author in authors {
            let name = author.name.clone();
            if author_table.insert(name.clone(), author).is_some() {
                return Err(CatalogError::DuplicateAuthor { name });
            }
        }

        let mut seen_comments = BTreeSet::new();
        for comment in &comments {
            if !seen_comments.insert(comment.id) {
                return Err(CatalogError::DuplicateCommentId { id: comment.id });
            }
            if !seen_materials.contains(&comment.material_id) {
                return Err(CatalogError::UnknownMaterial {
                    id: comment.id,
                    material_id: comment.material_id,
                });
            }
        }

        for material in &materials {
            if !author_table.contains_key(&material.author) {
                return Err(CatalogError::UnknownAuthor {
                    id: material.id,
                    author: material.author.clone(),
                });
            }
        }

        Ok(Self {
            materials,
            comments,
            authors: author_table,
        })
    }

    /// The full material table in load order.
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Look up one material by id.
    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    /// Look up an author record by exact display name.
    pub fn author(&self, name: &str) -> Option<&Author> {
        self.authors.get(name)
    }

    /// All author records, ordered by name.
    pub fn authors(&self) -> impl Iterator<Item = &Author> {
        self.authors.values()
    }
}
