//! Route definitions for the movie pages.
//!
//! ```text
//! GET  /                        list_movies (home page + search)
//! GET  /movies/{id}             movie_detail
//! GET  /movies/add              movie_form
//! POST /movies/add              create_movie
//! GET  /movies/edit/{id}        edit_movie_form
//! POST /movies/edit/{id}        update_movie
//! GET  /movies/delete/{id}      delete_movie_confirm
//! POST /movies/delete/{id}      delete_movie
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list_movies))
        .route(
            "/movies/add",
            get(movies::movie_form).post(movies::create_movie),
        )
        .route(
            "/movies/edit/{id}",
            get(movies::edit_movie_form).post(movies::update_movie),
        )
        .route(
            "/movies/delete/{id}",
            get(movies::delete_movie_confirm).post(movies::delete_movie),
        )
        .route("/movies/{id}", get(movies::movie_detail))
}
