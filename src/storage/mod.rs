//! Storage layer for the projection cache
//!
//! The cache is a single JSON document written by `update` and read by
//! `show`:
//! - `models`: the cached document and its metadata
//! - `projection_cache`: atomic write and read of that document

pub mod models;
pub mod projection_cache;


pub use models::ProjectionCache;
pub use projection_cache::{read_projection_cache, write_projection_cache};
