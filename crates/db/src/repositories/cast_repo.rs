//! Repository for the `movie_cast` association table.

use cinelog_core::types::DbId;
use sqlx::PgPool;

use crate::models::cast::{CastCredit, CastMember};

/// Operations on cast credits (the person<->movie join rows).
pub struct CastRepo;

impl CastRepo {
    /// Insert a credit linking a person to a movie. A missing role
    /// falls back to the `'cast'` default.
    pub async fn add(
        pool: &PgPool,
        movie_id: DbId,
        person_id: DbId,
        role: Option<&str>,
    ) -> Result<CastCredit, sqlx::Error> {
        sqlx::query_as::<_, CastCredit>(
            "INSERT INTO movie_cast (movie_id, person_id, role)
             VALUES ($1, $2, COALESCE($3, 'cast'))
             RETURNING id, person_id, movie_id, role",
        )
        .bind(movie_id)
        .bind(person_id)
        .bind(role)
        .fetch_one(pool)
        .await
    }

    /// Credits for a movie whose role contains `'cast'`, joined to the
    /// person, ordered by the person's first name.
    ///
    /// The substring match (rather than equality) is a deliberate
    /// compatibility quirk: a role like `'cast (young)'` still counts.
    pub async fn for_movie(pool: &PgPool, movie_id: DbId) -> Result<Vec<CastMember>, sqlx::Error> {
        sqlx::query_as::<_, CastMember>(
            "SELECT c.person_id, p.first_name, p.last_name, c.role
             FROM movie_cast c
             JOIN persons p ON p.id = c.person_id
             WHERE c.movie_id = $1 AND c.role LIKE '%cast%'
             ORDER BY p.first_name, p.id",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }

    /// All raw credits for a movie, regardless of role.
    pub async fn credits_for_movie(
        pool: &PgPool,
        movie_id: DbId,
    ) -> Result<Vec<CastCredit>, sqlx::Error> {
        sqlx::query_as::<_, CastCredit>(
            "SELECT id, person_id, movie_id, role
             FROM movie_cast WHERE movie_id = $1
             ORDER BY id",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }
}
