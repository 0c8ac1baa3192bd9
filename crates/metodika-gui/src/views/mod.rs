//! View components
//!
//! Each view represents a major panel in the application.

mod author;
mod catalog;
mod material;

pub use author::AuthorView;
pub use catalog::CatalogView;
pub use material::MaterialView;
