//! Cast association model (the person<->movie join with a role label).

use cinelog_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A raw `movie_cast` row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CastCredit {
    pub id: DbId,
    pub person_id: DbId,
    pub movie_id: DbId,
    pub role: String,
}

/// A cast credit joined to the person it names, as shown on the movie
/// detail page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CastMember {
    pub person_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}
