//! Repository for the `genres` table.

use cinelog_core::types::DbId;
use sqlx::PgPool;

use crate::models::genre::{CreateGenre, Genre};

const COLUMNS: &str = "id, name, created_at, updated_at";

/// Create and list operations for genres. Genres have no edit surface;
/// they are seeded once and referenced by movies from then on.
pub struct GenreRepo;

impl GenreRepo {
    /// Insert a new genre, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateGenre) -> Result<Genre, sqlx::Error> {
        let query = format!("INSERT INTO genres (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Genre>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// List every genre, ordered by name ascending.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres ORDER BY name, id");
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }

    /// Every genre id. Stands in for an absent genre selection when the
    /// movie search resolves its defaults.
    pub async fn all_ids(pool: &PgPool) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM genres ORDER BY id")
            .fetch_all(pool)
            .await
    }
}
