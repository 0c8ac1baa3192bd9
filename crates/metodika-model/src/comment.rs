use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::material::MaterialId;

/// A reply attached to exactly one material.
///
/// Comments are append-only: there is no edit or delete. Ids are assigned as
/// `table length + 1` at insertion and are therefore only unique within a
/// session (the table resets with the process).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    pub material_id: MaterialId,
    pub author: String,
    pub author_avatar: String,
    pub text: String,
    pub posted: NaiveDate,
}
