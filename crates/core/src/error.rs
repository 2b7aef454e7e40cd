use crate::types::DbId;

/// Domain-level error taxonomy shared across crates.
///
/// The HTTP layer maps these onto status codes; the repository layer
/// produces them where a database error carries domain meaning.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup by id found nothing.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A form input failed validation. The message names the field.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An operation would violate a required relationship
    /// (e.g. a movie referencing a nonexistent director).
    #[error("Integrity violation: {0}")]
    Integrity(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
