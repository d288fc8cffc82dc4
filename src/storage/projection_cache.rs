//! Read and write the projection cache file.

use std::{fs, io::ErrorKind, path::Path};

use crate::core::write_string;
use crate::storage::models::ProjectionCache;
use crate::{Result, VegasError};

/// Serialize the cache as pretty JSON and move it into place atomically.
pub fn write_projection_cache(path: &Path, cache: &ProjectionCache) -> Result<()> {
    let json = serde_json::to_string_pretty(cache)?;
    write_string(path, &json)?;
    log::info!(
        "wrote {} projections to {}",
        cache.projection_count,
        path.display()
    );
    Ok(())
}

/// Load a cache written by [`write_projection_cache`].
///
/// Only a missing file is `CacheNotFound`; other read failures are `Io`.
pub fn read_projection_cache(path: &Path) -> Result<ProjectionCache> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => VegasError::CacheNotFound {
            path: path.to_path_buf(),
        },
        _ => VegasError::Io(e),
    })?;
    Ok(serde_json::from_str(&contents)?)
}
