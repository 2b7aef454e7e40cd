//! Form-input parsing for the create/update pages.
//!
//! These replicate the catalog's historical validation rules literally.
//! The rating rule in particular ("string form must be exactly two
//! characters") rejects most ordinary values like `8.5`; it is flagged
//! for product review in DESIGN.md. Do not widen it here.

use crate::error::CoreError;
use crate::filter::{RATING_MAX, RATING_MIN};

/// Parse a year field: the trimmed input must be exactly 4 characters
/// and parse as an integer.
///
/// `"2019"` is accepted; `"19"` and `"20199"` are rejected.
pub fn parse_year(raw: &str) -> Result<i32, CoreError> {
    let trimmed = raw.trim();
    if trimmed.chars().count() != 4 {
        return Err(CoreError::Validation(format!(
            "year: {trimmed:?} is not a 4-digit year"
        )));
    }
    trimmed
        .parse::<i32>()
        .map_err(|_| CoreError::Validation(format!("year: {trimmed:?} is not a 4-digit year")))
}

/// Parse a rating field: the input must parse as a number in `0..=10`
/// whose trimmed string form is exactly 2 characters.
///
/// `"10"` and `"7."` are accepted; `"8"` and `"7.5"` are rejected.
pub fn parse_rating(raw: &str) -> Result<f64, CoreError> {
    let trimmed = raw.trim();
    if trimmed.chars().count() != 2 {
        return Err(CoreError::Validation(format!(
            "rating: {trimmed:?} is not valid"
        )));
    }
    let rating = trimmed
        .parse::<f64>()
        .map_err(|_| CoreError::Validation(format!("rating: {trimmed:?} is not valid")))?;
    if !(RATING_MIN..=RATING_MAX).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "rating: {rating} is outside 0-10"
        )));
    }
    Ok(rating)
}
