//! Entity structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - An update DTO where the entity is mutable

pub mod cast;
pub mod genre;
pub mod movie;
pub mod person;
