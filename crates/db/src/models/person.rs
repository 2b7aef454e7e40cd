//! Person entity model and DTOs.

use cinelog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A person row from the `persons` table: director, screenwriter, or
/// cast member. Default list ordering is by `first_name`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    /// Path to the stored portrait, relative to the media root.
    pub image_path: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new person.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePerson {
    pub first_name: String,
    pub last_name: String,
    pub image_path: String,
}

/// DTO for updating a person. Carries the full field set: the edit form
/// always submits every field.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePerson {
    pub first_name: String,
    pub last_name: String,
    pub image_path: String,
}
