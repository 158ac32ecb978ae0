//! Domain types shared by the track search service.
//!
//! Zero internal dependencies so both the repository layer and the HTTP
//! layer can use the same validated request types.

pub mod error;
pub mod search;
pub mod types;
