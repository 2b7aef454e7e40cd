//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod cast_repo;
pub mod genre_repo;
pub mod movie_repo;
pub mod person_repo;

pub use cast_repo::CastRepo;
pub use genre_repo::GenreRepo;
pub use movie_repo::MovieRepo;
pub use person_repo::PersonRepo;

/// Escape LIKE/ILIKE pattern metacharacters in a user-supplied term so
/// it matches as a literal substring. Backslash must go first; it is
/// the default escape character in Postgres.
pub(crate) fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
