//! Movie entity model and DTOs.

use cinelog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A movie row from the `movies` table. Default list ordering is by
/// `title`. Genre links and cast credits live in their own tables.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub director_id: DbId,
    pub screenplay_id: DbId,
    pub year: i32,
    pub rating: f64,
    /// Path to the stored poster, relative to the media root. Optional.
    pub image_path: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A cast entry as submitted on the movie form.
#[derive(Debug, Clone, Deserialize)]
pub struct CastEntry {
    pub person_id: DbId,
    /// Defaults to `"cast"` when omitted.
    pub role: Option<String>,
}

/// Validated insert payload for a movie, with its genre links and cast
/// credits. Built by the handler layer after form parsing; `year` and
/// `rating` are already past the input validators here.
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub director_id: DbId,
    pub screenplay_id: DbId,
    pub year: i32,
    pub rating: f64,
    pub genre_ids: Vec<DbId>,
    pub starring: Vec<(DbId, String)>,
    pub image_path: Option<String>,
}
