#![deny(unsafe_code)]

pub mod catalog;
pub mod dates;
pub mod error;
pub mod query;

pub use crate::catalog::{Catalog, PLACEHOLDER_AVATAR, SELF_AUTHOR};
pub use crate::error::{CatalogError, Result};
pub use crate::query::AuthorProfile;
