//! Handlers for the person ("stars") pages: list + search, detail,
//! create, update, and delete.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinelog_core::error::CoreError;
use cinelog_core::types::DbId;
use cinelog_db::models::movie::Movie;
use cinelog_db::models::person::{CreatePerson, Person, UpdatePerson};
use cinelog_db::repositories::PersonRepo;
use cinelog_db::DbPool;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Person detail page payload: the person and every movie they are
/// attached to as director, screenwriter, or cast member.
#[derive(Debug, Serialize)]
pub struct PersonDetail {
    pub person: Person,
    pub movies: Vec<Movie>,
}

// ---------------------------------------------------------------------------
// List + search
// ---------------------------------------------------------------------------

/// GET /stars
///
/// Person listing with an optional `?search=` substring matched
/// case-insensitively against first or last name. Blank search returns
/// everyone, ordered by first name.
pub async fn list_stars(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let stars = match params.search.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => PersonRepo::search(&state.pool, term).await?,
        _ => PersonRepo::list_all(&state.pool).await?,
    };

    Ok(Json(DataResponse { data: stars }))
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

/// GET /stars/{id}
///
/// Person detail with their movies (any role), ordered by title.
pub async fn star_detail(
    State(state): State<AppState>,
    Path(person_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let person = find_person(&state.pool, person_id).await?;
    let movies = PersonRepo::movies_for(&state.pool, person_id).await?;

    Ok(Json(DataResponse {
        data: PersonDetail { person, movies },
    }))
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// GET /stars/add
///
/// The person form has no reference data to prefill; respond with an
/// empty payload so the page handler contract stays uniform.
pub async fn star_form() -> impl IntoResponse {
    Json(DataResponse {
        data: serde_json::json!({}),
    })
}

/// POST /stars/add
pub async fn create_star(
    State(state): State<AppState>,
    Json(input): Json<CreatePerson>,
) -> AppResult<impl IntoResponse> {
    validate_names(&input.first_name, &input.last_name)?;

    let person = PersonRepo::create(&state.pool, &input).await?;

    tracing::info!(
        person_id = person.id,
        name = %format!("{} {}", person.first_name, person.last_name),
        "Person created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: person })))
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// GET /stars/edit/{id}
///
/// Current person state, for prefill.
pub async fn edit_star_form(
    State(state): State<AppState>,
    Path(person_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let person = find_person(&state.pool, person_id).await?;

    Ok(Json(DataResponse { data: person }))
}

/// POST /stars/edit/{id}
pub async fn update_star(
    State(state): State<AppState>,
    Path(person_id): Path<DbId>,
    Json(input): Json<UpdatePerson>,
) -> AppResult<impl IntoResponse> {
    validate_names(&input.first_name, &input.last_name)?;

    let person = PersonRepo::update(&state.pool, person_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id: person_id,
        }))?;

    tracing::info!(person_id, "Person updated");

    Ok(Json(DataResponse { data: person }))
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// GET /stars/delete/{id}
///
/// The person being deleted, for the confirmation page.
pub async fn delete_star_confirm(
    State(state): State<AppState>,
    Path(person_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let person = find_person(&state.pool, person_id).await?;

    Ok(Json(DataResponse { data: person }))
}

/// POST /stars/delete/{id}
///
/// Delete the person. Cascades remove every movie they direct or wrote
/// and every cast credit naming them.
pub async fn delete_star(
    State(state): State<AppState>,
    Path(person_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PersonRepo::delete(&state.pool, person_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id: person_id,
        }));
    }

    tracing::info!(person_id, "Person deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_person(pool: &DbPool, person_id: DbId) -> AppResult<Person> {
    PersonRepo::find_by_id(pool, person_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id: person_id,
        }))
}

fn validate_names(first_name: &str, last_name: &str) -> AppResult<()> {
    if first_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "first_name: must not be empty".into(),
        )));
    }
    if last_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "last_name: must not be empty".into(),
        )));
    }
    Ok(())
}
