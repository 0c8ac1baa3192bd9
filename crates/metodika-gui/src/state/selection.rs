//! The view-selection state machine.
//!
//! At most one material and one author can be open at a time, on two mostly
//! independent axes. The tagged union makes the axes and their one coupling
//! rule (picking a material from an open author panel closes the panel)
//! explicit instead of spreading them over two nullable fields.

use metodika_model::MaterialId;

/// Which detail panels are open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing is open; only the catalog grid shows.
    #[default]
    Browsing,
    /// A material detail panel is open.
    Material(MaterialId),
    /// An author profile panel is open.
    Author(String),
    /// Both panels are open at once.
    MaterialAndAuthor {
        material: MaterialId,
        author: String,
    },
}

impl Selection {
    /// The open material, if any.
    pub fn material(&self) -> Option<MaterialId> {
        match self {
            Selection::Material(id) | Selection::MaterialAndAuthor { material: id, .. } => {
                Some(*id)
            }
            Selection::Browsing | Selection::Author(_) => None,
        }
    }

    /// The open author, if any.
    pub fn author(&self) -> Option<&str> {
        match self {
            Selection::Author(name) | Selection::MaterialAndAuthor { author: name, .. } => {
                Some(name)
            }
            Selection::Browsing | Selection::Material(_) => None,
        }
    }

    pub fn is_browsing(&self) -> bool {
        matches!(self, Selection::Browsing)
    }

    /// Open a material. An open author panel stays open.
    pub fn open_material(&mut self, id: MaterialId) {
        *self = match std::mem::take(self) {
            Selection::Author(author) | Selection::MaterialAndAuthor { author, .. } => {
                Selection::MaterialAndAuthor {
                    material: id,
                    author,
                }
            }
            Selection::Browsing | Selection::Material(_) => Selection::Material(id),
        };
        tracing::debug!(material = %id, "material opened");
    }

    /// Open an author profile. An open material panel stays open.
    pub fn open_author(&mut self, name: String) {
        tracing::debug!(author = %name, "author opened");
        *self = match std::mem::take(self) {
            Selection::Material(material) | Selection::MaterialAndAuthor { material, .. } => {
                Selection::MaterialAndAuthor {
                    material,
                    author: name,
                }
            }
            Selection::Browsing | Selection::Author(_) => Selection::Author(name),
        };
    }

    /// Open a material from inside the author panel.
    ///
    /// The one coupling rule: this also closes the author panel.
    pub fn open_material_from_author(&mut self, id: MaterialId) {
        tracing::debug!(material = %id, "material opened from author panel");
        *self = Selection::Material(id);
    }

    /// Close the material panel; the author axis is unaffected.
    pub fn close_material(&mut self) {
        *self = match std::mem::take(self) {
            Selection::Author(author) | Selection::MaterialAndAuthor { author, .. } => {
                Selection::Author(author)
            }
            Selection::Browsing | Selection::Material(_) => Selection::Browsing,
        };
    }

    /// Close the author panel; the material axis is unaffected.
    pub fn close_author(&mut self) {
        *self = match std::mem::take(self) {
            Selection::Material(material) | Selection::MaterialAndAuthor { material, .. } => {
                Selection::Material(material)
            }
            Selection::Browsing | Selection::Author(_) => Selection::Browsing,
        };
    }
}
