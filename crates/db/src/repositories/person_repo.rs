//! Repository for the `persons` table.

use cinelog_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::Movie;
use crate::models::person::{CreatePerson, Person, UpdatePerson};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, image_path, created_at, updated_at";

/// CRUD and search operations for persons.
pub struct PersonRepo;

impl PersonRepo {
    /// Insert a new person, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePerson) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO persons (first_name, last_name, image_path)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.image_path)
            .fetch_one(pool)
            .await
    }

    /// Find a person by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM persons WHERE id = $1");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every person, ordered by first name ascending.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM persons ORDER BY first_name, id");
        sqlx::query_as::<_, Person>(&query).fetch_all(pool).await
    }

    /// Case-insensitive substring search against first OR last name,
    /// ordered by first name. The empty term matches every person; the
    /// movie search relies on that when no cast name was supplied.
    ///
    /// Pattern metacharacters in the term are escaped, so `%` and `_`
    /// match literally.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM persons
             WHERE first_name ILIKE '%' || $1 || '%'
                OR last_name ILIKE '%' || $1 || '%'
             ORDER BY first_name, id"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(super::escape_like(term))
            .fetch_all(pool)
            .await
    }

    /// All movies the person is attached to as director, screenwriter,
    /// or cast member. Deduplicated, ordered by title.
    pub async fn movies_for(pool: &PgPool, person_id: DbId) -> Result<Vec<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            "SELECT m.id, m.title, m.director_id, m.screenplay_id, m.year, m.rating,
                    m.image_path, m.created_at, m.updated_at
             FROM movies m
             WHERE m.director_id = $1
                OR m.screenplay_id = $1
                OR EXISTS (
                    SELECT 1 FROM movie_cast c
                    WHERE c.movie_id = m.id AND c.person_id = $1
                )
             ORDER BY m.title, m.id",
        )
        .bind(person_id)
        .fetch_all(pool)
        .await
    }

    /// Full-field update (the edit form submits every field).
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePerson,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query = format!(
            "UPDATE persons SET
                first_name = $2,
                last_name = $3,
                image_path = $4,
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.image_path)
            .fetch_optional(pool)
            .await
    }

    /// Delete a person by id. Returns `true` if a row was removed.
    ///
    /// Schema cascades remove any movie the person directs or wrote,
    /// and any cast credit naming them.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM persons WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
