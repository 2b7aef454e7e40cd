//! Request handlers, one module per entity.

pub mod movies;
pub mod stars;
