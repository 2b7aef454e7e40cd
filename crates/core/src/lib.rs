//! Domain layer for the CineLog catalog.
//!
//! Zero internal dependencies so it can be used by both the repository
//! layer and the HTTP layer (and any future CLI tooling).

pub mod error;
pub mod filter;
pub mod forms;
pub mod types;
