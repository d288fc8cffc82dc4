//! Core utilities for the Vegas props projection CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: File system paths and atomic writes for the projection cache
//! - `http`: Request headers and quota header parsing for The Odds API

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{default_projection_cache_path, try_read_to_string, write_string};
pub use http::{common_headers, quota_header};
