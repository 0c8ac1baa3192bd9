use metodika_model::MaterialId;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse embedded {table} table: {source}")]
    Parse {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate material id {id}")]
    DuplicateMaterialId { id: MaterialId },

    #[error("duplicate comment id {id}")]
    DuplicateCommentId { id: u32 },

    #[error("duplicate author record \"{name}\"")]
    DuplicateAuthor { name: String },

    #[error("comment {id} references unknown material {material_id}")]
    UnknownMaterial { id: u32, material_id: MaterialId },

    #[error("material {id} references author \"{author}\" with no profile record")]
    UnknownAuthor { id: MaterialId, author: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
