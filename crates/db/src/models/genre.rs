//! Genre entity model.

use cinelog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A genre row. Ordered by `name`; effectively immutable once movies
/// reference it, though nothing enforces that.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new genre.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGenre {
    pub name: String,
}
