//! Query-string decoding for the list/search pages.
//!
//! The movie search form submits `genre` as a repeatable key, so the
//! handler extracts the raw key/value pairs and this module folds them
//! into a [`MovieFilter`]. Blank values are treated as absent, matching
//! how an empty form field submits.

use cinelog_core::filter::MovieFilter;
use serde::Deserialize;

/// Query parameters for the person list page (`?search=`).
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

/// Build a [`MovieFilter`] from raw query pairs.
///
/// Recognized keys: `title`, `cast_name`, `year_from`, `year_to`,
/// `rating_from`, `rating_to`, and repeatable `genre`. Blank values and
/// values that fail numeric parsing count as "not supplied"; unknown
/// keys are ignored. Search input is never rejected, only narrowed.
pub fn movie_filter_from_pairs(pairs: &[(String, String)]) -> MovieFilter {
    let mut filter = MovieFilter::default();

    for (key, value) in pairs {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        match key.as_str() {
            "title" => filter.title = Some(value.to_string()),
            "cast_name" => filter.cast_name = Some(value.to_string()),
            "year_from" => filter.year_from = value.parse().ok(),
            "year_to" => filter.year_to = value.parse().ok(),
            "rating_from" => filter.rating_from = value.parse().ok(),
            "rating_to" => filter.rating_to = value.parse().ok(),
            "genre" => {
                if let Ok(id) = value.parse() {
                    filter.genre_ids.push(id);
                }
            }
            _ => {}
        }
    }

    filter
}
