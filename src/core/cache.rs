//! File system helpers for the projection cache.

use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};


/// File name of the projection cache inside the cache directory.
pub const PROJECTION_CACHE_FILE: &str = "projections_cache.json";

/// Path: ~/.cache/vegas-ffl (or the platform cache dir).
pub fn cache_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("vegas-ffl")
}

/// Path: ~/.cache/vegas-ffl/projections_cache.json
pub fn default_projection_cache_path() -> PathBuf {
    cache_dir().join(PROJECTION_CACHE_FILE)
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories.
///
/// Contents go to a sibling temp file first and are renamed into place, so a
/// concurrent reader sees either the old file or the complete new one.
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| PROJECTION_CACHE_FILE.to_string());
    let tmp_path = parent.join(format!(".{}.tmp-{}", file_name, std::process::id()));

    let mut f = fs::File::create(&tmp_path)?;
    f.write_all(contents.as_bytes())?;
    f.sync_all()?;
    drop(f);

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        e
    })
}
