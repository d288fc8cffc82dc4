//! Error types for the Vegas props projection CLI

use std::path::PathBuf;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, VegasError>;

#[derive(Error, Debug)]
pub enum VegasError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("API key not provided and {env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    #[error("No cached projections found at {}. Run `vegas-ffl update` first", path.display())]
    CacheNotFound { path: PathBuf },

    #[error("The Odds API returned no data: {context}")]
    NoData { context: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Unknown prop market: {key}")]
    UnknownMarket { key: String },

    #[error("Unknown scoring format: {name}")]
    UnknownFormat { name: String },

    #[error("Invalid scoring configuration: {reason}")]
    InvalidScoring { reason: String },
}
