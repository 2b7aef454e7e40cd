//! Route definitions.
//!
//! Route hierarchy:
//!
//! ```text
//! /health                       liveness + db ping
//!
//! /                             movie list + search
//! /movies/{id}                  movie detail
//! /movies/add                   form data (GET), create (POST)
//! /movies/edit/{id}             edit form data (GET), update (POST)
//! /movies/delete/{id}           confirmation data (GET), delete (POST)
//!
//! /stars                        person list + search
//! /stars/{id}                   person detail
//! /stars/add                    empty form (GET), create (POST)
//! /stars/edit/{id}              edit form data (GET), update (POST)
//! /stars/delete/{id}            confirmation data (GET), delete (POST)
//! ```
//!
//! The static `/movies/add` route is registered alongside the dynamic
//! `/movies/{id}`; axum prefers the static match, so "add" never parses
//! as an id. Same for `/stars`.

pub mod health;
pub mod movies;
pub mod stars;

use axum::Router;

use crate::state::AppState;

/// Build the site route tree (everything except `/health` and `/media`).
pub fn site_routes() -> Router<AppState> {
    Router::new()
        .merge(movies::router())
        .merge(stars::router())
}
