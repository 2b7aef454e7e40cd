//! Movie search criteria and default resolution.
//!
//! The movie list page accepts any combination of optional criteria. When
//! every criterion is absent the caller short-circuits to a plain listing;
//! otherwise the missing bounds are filled in with the documented defaults
//! before the repository runs the candidate-person search.

use chrono::Datelike;

use crate::types::DbId;

/// Lower bound applied when `rating_from` is absent.
pub const RATING_MIN: f64 = 0.0;

/// Upper bound applied when `rating_to` is absent.
pub const RATING_MAX: f64 = 10.0;

/// The current calendar year (UTC). Default upper bound for `year_to`.
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Optional criteria for the movie list page, as supplied by the user.
///
/// `None` and empty-string/empty-set values both mean "not supplied";
/// the HTTP layer normalizes blank form fields to `None` before
/// constructing this.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieFilter {
    pub title: Option<String>,
    pub cast_name: Option<String>,
    pub genre_ids: Vec<DbId>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub rating_from: Option<f64>,
    pub rating_to: Option<f64>,
}

impl MovieFilter {
    /// True when no criterion was supplied at all.
    ///
    /// An empty filter means "list every movie" with no person-candidate
    /// resolution; any single criterion switches the search into filtered
    /// mode, where *all* bounds (supplied or defaulted) apply.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.cast_name.is_none()
            && self.genre_ids.is_empty()
            && self.year_from.is_none()
            && self.year_to.is_none()
            && self.rating_from.is_none()
            && self.rating_to.is_none()
    }

    /// Fill in defaults for every missing bound.
    ///
    /// `all_genre_ids` stands in for an absent genre selection, so a
    /// filtered search still requires the movie to carry at least one
    /// genre. The empty `cast_name` substring matches every person; the
    /// candidate-person resolution runs regardless, which is the intended
    /// behavior of the search (see the repository layer).
    pub fn resolve(&self, all_genre_ids: Vec<DbId>) -> ResolvedMovieFilter {
        ResolvedMovieFilter {
            title: self.title.clone().unwrap_or_default(),
            cast_name: self.cast_name.clone().unwrap_or_default(),
            genre_ids: if self.genre_ids.is_empty() {
                all_genre_ids
            } else {
                self.genre_ids.clone()
            },
            year_from: self.year_from.unwrap_or(0),
            year_to: self.year_to.unwrap_or_else(current_year),
            rating_from: self.rating_from.unwrap_or(RATING_MIN),
            rating_to: self.rating_to.unwrap_or(RATING_MAX),
        }
    }
}

/// A [`MovieFilter`] with every bound made concrete.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMovieFilter {
    pub title: String,
    pub cast_name: String,
    pub genre_ids: Vec<DbId>,
    pub year_from: i32,
    pub year_to: i32,
    pub rating_from: f64,
    pub rating_to: f64,
}
