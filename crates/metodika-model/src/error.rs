use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
