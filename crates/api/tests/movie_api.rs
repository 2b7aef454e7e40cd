//! Integration tests for the movie pages over HTTP.
//!
//! Persons are created through the API; genres are seeded through the
//! repository (genres have no public management surface).

mod common;

use axum::http::StatusCode;
use axum::Router;
use cinelog_db::models::genre::CreateGenre;
use cinelog_db::repositories::GenreRepo;
use common::{body_json, get, post_json, post_json_ok};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_star(app: Router, first: &str, last: &str) -> i64 {
    let body = post_json_ok(
        app,
        "/stars/add",
        json!({
            "first_name": first,
            "last_name": last,
            "image_path": format!("people/{}.jpg", first.to_lowercase()),
        }),
        StatusCode::CREATED,
    )
    .await;
    body["data"]["id"].as_i64().unwrap()
}

async fn seed_genre(pool: &PgPool, name: &str) -> i64 {
    GenreRepo::create(
        pool,
        &CreateGenre {
            name: name.to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

/// Baseline catalog seeded over the API: Bob directs and writes
/// "Engine" (2020, Sci-Fi), Ada stars. Returns the movie and genre ids.
async fn seed_engine(app: &Router, pool: &PgPool) -> (i64, i64) {
    let ada = create_star(app.clone(), "Ada", "Lovelace").await;
    let bob = create_star(app.clone(), "Bob", "Director").await;
    let scifi = seed_genre(pool, "Sci-Fi").await;

    let body = post_json_ok(
        app.clone(),
        "/movies/add",
        json!({
            "title": "Engine",
            "director_id": bob,
            "screenplay_id": bob,
            "year": "2020",
            "genre_ids": [scifi],
            "starring": [{ "person_id": ada, "role": "cast" }],
        }),
        StatusCode::CREATED,
    )
    .await;
    (body["data"]["movie"]["id"].as_i64().unwrap(), scifi)
}

fn listed_titles(body: &serde_json::Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Test: Create + detail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_fetch_movie_detail(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (movie_id, _) = seed_engine(&app, &pool).await;

    let response = get(app.clone(), &format!("/movies/{movie_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let data = &body["data"];
    assert_eq!(data["movie"]["title"], "Engine");
    assert_eq!(data["movie"]["year"], 2020);
    // No rating submitted: the model default applies.
    assert_eq!(data["movie"]["rating"], 1.0);
    assert_eq!(data["director"]["first_name"], "Bob");
    assert_eq!(data["screenplay"]["first_name"], "Bob");
    assert_eq!(data["genres"][0]["name"], "Sci-Fi");
    assert_eq!(data["starring"][0]["first_name"], "Ada");
    assert_eq!(data["starring"][0]["role"], "cast");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn movie_detail_missing_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/movies/9999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn movie_form_returns_reference_data(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    create_star(app.clone(), "Ada", "Lovelace").await;
    seed_genre(&pool, "Drama").await;

    let response = get(app, "/movies/add").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["persons"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["genres"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: Search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_by_cast_name_substring(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    seed_engine(&app, &pool).await;

    let response = get(app.clone(), "/?cast_name=ada").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(listed_titles(&body_json(response).await), vec!["Engine"]);

    let response = get(app, "/?year_from=2021").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(listed_titles(&body_json(response).await).is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn home_page_lists_all_movies_without_criteria(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    seed_engine(&app, &pool).await;

    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(listed_titles(&body_json(response).await), vec!["Engine"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_accepts_repeated_genre_params(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (_, scifi) = seed_engine(&app, &pool).await;
    let drama = seed_genre(&pool, "Drama").await;

    let response = get(app.clone(), &format!("/?genre={drama}")).await;
    assert!(listed_titles(&body_json(response).await).is_empty());

    let response = get(app, &format!("/?genre={scifi}&genre={drama}")).await;
    assert_eq!(listed_titles(&body_json(response).await), vec!["Engine"]);
}

// ---------------------------------------------------------------------------
// Test: Validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn year_must_be_four_digits(pool: PgPool) {
    let app = common::build_test_app(pool);
    let bob = create_star(app.clone(), "Bob", "Director").await;

    for bad_year in ["19", "20199"] {
        let response = post_json(
            app.clone(),
            "/movies/add",
            json!({
                "title": "Engine",
                "director_id": bob,
                "screenplay_id": bob,
                "year": bad_year,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rating_follows_the_two_character_rule(pool: PgPool) {
    let app = common::build_test_app(pool);
    let bob = create_star(app.clone(), "Bob", "Director").await;

    // "7." is two characters and parses: accepted as 7.0.
    let body = post_json_ok(
        app.clone(),
        "/movies/add",
        json!({
            "title": "Engine",
            "director_id": bob,
            "screenplay_id": bob,
            "year": "2020",
            "rating": "7.",
        }),
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(body["data"]["movie"]["rating"], 7.0);

    // "7.5" is three characters: rejected by the literal rule.
    let response = post_json(
        app,
        "/movies/add",
        json!({
            "title": "Engine II",
            "director_id": bob,
            "screenplay_id": bob,
            "year": "2020",
            "rating": "7.5",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn movie_without_existing_director_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/movies/add",
        json!({
            "title": "Ghost",
            "director_id": 9999,
            "screenplay_id": 9999,
            "year": "2020",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "INTEGRITY_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_title_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let bob = create_star(app.clone(), "Bob", "Director").await;

    let response = post_json(
        app,
        "/movies/add",
        json!({
            "title": "   ",
            "director_id": bob,
            "screenplay_id": bob,
            "year": "2020",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: Update + delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn edit_movie_roundtrip(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (movie_id, _) = seed_engine(&app, &pool).await;

    // Prefill payload carries the current state and reference data.
    let response = get(app.clone(), &format!("/movies/edit/{movie_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["movie"]["movie"]["title"], "Engine");
    assert!(body["data"]["persons"].as_array().unwrap().len() >= 2);

    let bob = body["data"]["movie"]["director"]["id"].as_i64().unwrap();
    let body = post_json_ok(
        app.clone(),
        &format!("/movies/edit/{movie_id}"),
        json!({
            "title": "Engine II",
            "director_id": bob,
            "screenplay_id": bob,
            "year": "2022",
        }),
        StatusCode::OK,
    )
    .await;
    assert_eq!(body["data"]["movie"]["title"], "Engine II");
    assert_eq!(body["data"]["movie"]["year"], 2022);
    // The update replaced the cast selection with the (empty) submission.
    assert!(body["data"]["starring"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn edit_missing_movie_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let bob = create_star(app.clone(), "Bob", "Director").await;

    let response = post_json(
        app,
        "/movies/edit/9999",
        json!({
            "title": "Ghost",
            "director_id": bob,
            "screenplay_id": bob,
            "year": "2020",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_movie_confirm_then_delete(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (movie_id, _) = seed_engine(&app, &pool).await;

    // Confirmation page exposes the entity being deleted.
    let response = get(app.clone(), &format!("/movies/delete/{movie_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["title"], "Engine");

    let response = post_json(
        app.clone(),
        &format!("/movies/delete/{movie_id}"),
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/movies/{movie_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
