//! Handlers for the movie pages: list + search, detail, create, update,
//! and delete.
//!
//! These stay thin: parameter extraction, form validation via
//! `cinelog_core::forms`, then a repository call. Search semantics live
//! in `MovieRepo::search`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinelog_core::error::CoreError;
use cinelog_core::forms;
use cinelog_core::types::DbId;
use cinelog_db::models::cast::CastMember;
use cinelog_db::models::genre::Genre;
use cinelog_db::models::movie::{CastEntry, Movie, NewMovie};
use cinelog_db::models::person::Person;
use cinelog_db::repositories::{CastRepo, GenreRepo, MovieRepo, PersonRepo};
use cinelog_db::DbPool;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::query::movie_filter_from_pairs;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Movie create/update submission. `year` and `rating` arrive as the raw
/// form strings so the literal input validators can apply.
#[derive(Debug, Deserialize)]
pub struct MovieForm {
    pub title: String,
    pub director_id: DbId,
    pub screenplay_id: DbId,
    pub year: String,
    /// Omitted rating falls back to the model default of 1.0.
    pub rating: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<DbId>,
    #[serde(default)]
    pub starring: Vec<CastEntry>,
    pub image_path: Option<String>,
}

/// Movie detail page payload: the row plus its derived relations.
#[derive(Debug, Serialize)]
pub struct MovieDetail {
    pub movie: Movie,
    pub director: Person,
    pub screenplay: Person,
    pub genres: Vec<Genre>,
    /// Credits whose role contains `'cast'`, ordered by person.
    pub starring: Vec<CastMember>,
}

/// Reference data the movie form needs: every person and genre.
#[derive(Debug, Serialize)]
pub struct MovieFormData {
    pub persons: Vec<Person>,
    pub genres: Vec<Genre>,
}

/// Edit page payload: the current detail plus the form reference data.
#[derive(Debug, Serialize)]
pub struct MovieEditData {
    pub movie: MovieDetail,
    pub persons: Vec<Person>,
    pub genres: Vec<Genre>,
}

// ---------------------------------------------------------------------------
// List + search
// ---------------------------------------------------------------------------

/// GET /
///
/// Home page listing. Accepts the search criteria `title`, `cast_name`,
/// `year_from`, `year_to`, `rating_from`, `rating_to`, and repeatable
/// `genre`; with none supplied, returns every movie ordered by title.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    let filter = movie_filter_from_pairs(&pairs);
    let movies = MovieRepo::search(&state.pool, &filter).await?;

    Ok(Json(DataResponse { data: movies }))
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

/// GET /movies/{id}
///
/// Movie detail: poster path, genres, director, screenplay, and the
/// cast credits (role containing `'cast'`, ordered by person).
pub async fn movie_detail(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let movie = find_movie(&state.pool, movie_id).await?;
    let detail = load_detail(&state.pool, movie).await?;

    Ok(Json(DataResponse { data: detail }))
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// GET /movies/add
///
/// Reference data for the creation form.
pub async fn movie_form(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let data = form_data(&state.pool).await?;

    Ok(Json(DataResponse { data }))
}

/// POST /movies/add
///
/// Validate and create a movie; responds with the detail payload the
/// client redirects to.
pub async fn create_movie(
    State(state): State<AppState>,
    Json(form): Json<MovieForm>,
) -> AppResult<impl IntoResponse> {
    let input = validate_form(&state.pool, form).await?;
    let movie = MovieRepo::create(&state.pool, &input).await?;

    tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");

    let detail = load_detail(&state.pool, movie).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// GET /movies/edit/{id}
///
/// Current movie state plus form reference data, for prefill.
pub async fn edit_movie_form(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let movie = find_movie(&state.pool, movie_id).await?;
    let detail = load_detail(&state.pool, movie).await?;
    let reference = form_data(&state.pool).await?;

    Ok(Json(DataResponse {
        data: MovieEditData {
            movie: detail,
            persons: reference.persons,
            genres: reference.genres,
        },
    }))
}

/// POST /movies/edit/{id}
///
/// Validate and apply a full-field update, replacing genre links and
/// cast credits with the submitted selection.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
    Json(form): Json<MovieForm>,
) -> AppResult<impl IntoResponse> {
    let input = validate_form(&state.pool, form).await?;
    let movie = MovieRepo::update(&state.pool, movie_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }))?;

    tracing::info!(movie_id, title = %movie.title, "Movie updated");

    let detail = load_detail(&state.pool, movie).await?;
    Ok(Json(DataResponse { data: detail }))
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// GET /movies/delete/{id}
///
/// The movie being deleted, for the confirmation page.
pub async fn delete_movie_confirm(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let movie = find_movie(&state.pool, movie_id).await?;

    Ok(Json(DataResponse { data: movie }))
}

/// POST /movies/delete/{id}
///
/// Delete the movie; cascades remove its genre links and cast credits.
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = MovieRepo::delete(&state.pool, movie_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }));
    }

    tracing::info!(movie_id, "Movie deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_movie(pool: &DbPool, movie_id: DbId) -> AppResult<Movie> {
    MovieRepo::find_by_id(pool, movie_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }))
}

async fn form_data(pool: &DbPool) -> AppResult<MovieFormData> {
    Ok(MovieFormData {
        persons: PersonRepo::list_all(pool).await?,
        genres: GenreRepo::list_all(pool).await?,
    })
}

/// Assemble the detail payload for a movie row.
///
/// Director and screenplay are FK-guaranteed to exist; a miss here means
/// the store broke its own invariant, surfaced as an internal error.
async fn load_detail(pool: &DbPool, movie: Movie) -> AppResult<MovieDetail> {
    let director = PersonRepo::find_by_id(pool, movie.director_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Internal(format!(
                "movie {} references missing director {}",
                movie.id, movie.director_id
            )))
        })?;
    let screenplay = PersonRepo::find_by_id(pool, movie.screenplay_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Internal(format!(
                "movie {} references missing screenwriter {}",
                movie.id, movie.screenplay_id
            )))
        })?;
    let genres = MovieRepo::genres_for(pool, movie.id).await?;
    let starring = CastRepo::for_movie(pool, movie.id).await?;

    Ok(MovieDetail {
        movie,
        director,
        screenplay,
        genres,
        starring,
    })
}

/// Validate a submission and resolve it into an insertable payload.
///
/// Field-level failures come back as `VALIDATION_ERROR`; a director or
/// screenwriter id naming no person is an `INTEGRITY_ERROR`, rejected
/// before touching the movies table.
async fn validate_form(pool: &DbPool, form: MovieForm) -> AppResult<NewMovie> {
    let title = form.title.trim().to_string();
    if title.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title: must not be empty".into(),
        )));
    }

    let year = forms::parse_year(&form.year)?;
    let rating = match form.rating.as_deref() {
        Some(raw) => forms::parse_rating(raw)?,
        None => 1.0,
    };

    if PersonRepo::find_by_id(pool, form.director_id).await?.is_none() {
        return Err(AppError::Core(CoreError::Integrity(format!(
            "director: no person with id {}",
            form.director_id
        ))));
    }
    if PersonRepo::find_by_id(pool, form.screenplay_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::Integrity(format!(
            "screenplay: no person with id {}",
            form.screenplay_id
        ))));
    }

    let starring = form
        .starring
        .into_iter()
        .map(|entry| {
            let role = entry.role.unwrap_or_else(|| "cast".to_string());
            (entry.person_id, role)
        })
        .collect();

    Ok(NewMovie {
        title,
        director_id: form.director_id,
        screenplay_id: form.screenplay_id,
        year,
        rating,
        genre_ids: form.genre_ids,
        starring,
        image_path: form.image_path,
    })
}
