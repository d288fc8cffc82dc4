//! Command implementations for the vegas-ffl CLI

pub mod common;
pub mod display;
pub mod formats;
pub mod project;
pub mod show;
pub mod update;


use std::path::PathBuf;

use crate::core::default_projection_cache_path;
use crate::{Result, VegasError, CACHE_FILE_ENV_VAR, ODDS_API_KEY_ENV_VAR};

/// Resolve the Odds API key from option or environment variable
pub fn resolve_api_key(api_key: Option<String>) -> Result<String> {
    api_key
        .or_else(|| std::env::var(ODDS_API_KEY_ENV_VAR).ok())
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .ok_or_else(|| VegasError::MissingApiKey {
            env_var: ODDS_API_KEY_ENV_VAR.to_string(),
        })
}

/// Resolve the cache file from option, environment variable, or the default path
pub fn resolve_cache_path(cache_file: Option<PathBuf>) -> PathBuf {
    cache_file
        .or_else(|| {
            std::env::var(CACHE_FILE_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(default_projection_cache_path)
}
