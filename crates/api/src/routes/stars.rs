//! Route definitions for the person ("stars") pages.
//!
//! ```text
//! GET  /stars                   list_stars (+ ?search=)
//! GET  /stars/{id}              star_detail
//! GET  /stars/add               star_form
//! POST /stars/add               create_star
//! GET  /stars/edit/{id}         edit_star_form
//! POST /stars/edit/{id}         update_star
//! GET  /stars/delete/{id}       delete_star_confirm
//! POST /stars/delete/{id}       delete_star
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::stars;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stars", get(stars::list_stars))
        .route(
            "/stars/add",
            get(stars::star_form).post(stars::create_star),
        )
        .route(
            "/stars/edit/{id}",
            get(stars::edit_star_form).post(stars::update_star),
        )
        .route(
            "/stars/delete/{id}",
            get(stars::delete_star_confirm).post(stars::delete_star),
        )
        .route("/stars/{id}", get(stars::star_detail))
}
