pub mod author;
pub mod comment;
pub mod domain;
pub mod error;
pub mod material;

pub use author::Author;
pub use comment::Comment;
pub use domain::{Category, CategoryFilter, SortKey};
pub use error::{ModelError, Result};
pub use material::{Material, MaterialId};
