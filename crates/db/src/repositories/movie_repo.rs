//! Repository for the `movies` table, including the multi-criteria
//! search used by the home page.

use std::collections::BTreeMap;

use cinelog_core::filter::{MovieFilter, ResolvedMovieFilter};
use cinelog_core::types::DbId;
use sqlx::PgPool;

use crate::models::genre::Genre;
use crate::models::movie::{Movie, NewMovie};
use crate::repositories::{GenreRepo, PersonRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, director_id, screenplay_id, year, rating, image_path, \
     created_at, updated_at";

/// CRUD and search operations for movies. Creation and update manage
/// the genre links and cast credits in the same transaction as the
/// movie row itself.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a movie together with its genre links and cast credits.
    ///
    /// Runs in a single transaction so a failed link insert (e.g. a
    /// dangling genre id) leaves no partial movie behind.
    pub async fn create(pool: &PgPool, input: &NewMovie) -> Result<Movie, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO movies (title, director_id, screenplay_id, year, rating, image_path)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(input.director_id)
            .bind(input.screenplay_id)
            .bind(input.year)
            .bind(input.rating)
            .bind(&input.image_path)
            .fetch_one(&mut *tx)
            .await?;

        Self::insert_links(&mut tx, movie.id, input).await?;

        tx.commit().await?;
        Ok(movie)
    }

    /// Find a movie by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every movie, ordered by title ascending.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY title, id");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// Genres linked to a movie, ordered by name.
    pub async fn genres_for(pool: &PgPool, movie_id: DbId) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>(
            "SELECT g.id, g.name, g.created_at, g.updated_at
             FROM genres g
             JOIN movie_genres mg ON mg.genre_id = g.id
             WHERE mg.movie_id = $1
             ORDER BY g.name, g.id",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }

    /// Full-field update, replacing the genre links and cast credits
    /// wholesale (form semantics: the edit page submits the complete
    /// selection every time).
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE movies SET
                title = $2,
                director_id = $3,
                screenplay_id = $4,
                year = $5,
                rating = $6,
                image_path = $7,
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(movie) = sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.director_id)
            .bind(input.screenplay_id)
            .bind(input.year)
            .bind(input.rating)
            .bind(&input.image_path)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM movie_genres WHERE movie_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM movie_cast WHERE movie_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        Self::insert_links(&mut tx, id, input).await?;

        tx.commit().await?;
        Ok(Some(movie))
    }

    /// Delete a movie by id. Returns `true` if a row was removed.
    /// Schema cascades remove its genre links and cast credits.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Multi-criteria movie search.
    ///
    /// With no criteria at all this is a plain title-ordered listing.
    /// Otherwise the search resolves the cast-name substring to a set of
    /// candidate persons (the empty substring matches everyone) and
    /// unions, per candidate, the movies that person is attached to as
    /// director, screenwriter, or cast member and that satisfy every
    /// remaining bound. The candidate resolution runs even when no cast
    /// name was supplied: a filtered search therefore only ever returns
    /// movies associated with at least one person and carrying at least
    /// one genre from the resolved set. That is the intended contract;
    /// do not short-circuit the person join for a blank cast name.
    pub async fn search(pool: &PgPool, filter: &MovieFilter) -> Result<Vec<Movie>, sqlx::Error> {
        if filter.is_empty() {
            return Self::list_all(pool).await;
        }

        let resolved = filter.resolve(GenreRepo::all_ids(pool).await?);
        let candidates = PersonRepo::search(pool, &resolved.cast_name).await?;

        // Union per-candidate result sets, deduplicated by movie id.
        let mut by_id: BTreeMap<DbId, Movie> = BTreeMap::new();
        for person in &candidates {
            let movies = Self::search_for_person(pool, person.id, &resolved).await?;
            for movie in movies {
                by_id.entry(movie.id).or_insert(movie);
            }
        }

        let mut result: Vec<Movie> = by_id.into_values().collect();
        result.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        Ok(result)
    }

    /// Movies attached to one candidate person that satisfy every
    /// resolved bound (title substring, year range, rating range, genre
    /// intersection).
    async fn search_for_person(
        pool: &PgPool,
        person_id: DbId,
        resolved: &ResolvedMovieFilter,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            "SELECT m.id, m.title, m.director_id, m.screenplay_id, m.year, m.rating,
                    m.image_path, m.created_at, m.updated_at
             FROM movies m
             WHERE (m.director_id = $1
                 OR m.screenplay_id = $1
                 OR EXISTS (
                     SELECT 1 FROM movie_cast c
                     WHERE c.movie_id = m.id AND c.person_id = $1
                 ))
               AND m.title ILIKE '%' || $2 || '%'
               AND m.year BETWEEN $3 AND $4
               AND m.rating BETWEEN $5 AND $6
               AND EXISTS (
                   SELECT 1 FROM movie_genres mg
                   WHERE mg.movie_id = m.id AND mg.genre_id = ANY($7)
               )",
        )
        .bind(person_id)
        .bind(super::escape_like(&resolved.title))
        .bind(resolved.year_from)
        .bind(resolved.year_to)
        .bind(resolved.rating_from)
        .bind(resolved.rating_to)
        .bind(&resolved.genre_ids)
        .fetch_all(pool)
        .await
    }

    /// Insert genre links and cast credits for a movie inside an open
    /// transaction.
    async fn insert_links(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        movie_id: DbId,
        input: &NewMovie,
    ) -> Result<(), sqlx::Error> {
        for genre_id in &input.genre_ids {
            sqlx::query("INSERT INTO movie_genres (movie_id, genre_id) VALUES ($1, $2)")
                .bind(movie_id)
                .bind(genre_id)
                .execute(&mut **tx)
                .await?;
        }
        for (person_id, role) in &input.starring {
            sqlx::query("INSERT INTO movie_cast (movie_id, person_id, role) VALUES ($1, $2, $3)")
                .bind(movie_id)
                .bind(person_id)
                .bind(role)
                .execute(&mut **tx)
                .await?;
        }
        Ok(())
    }
}
