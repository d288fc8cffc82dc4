//! Update command: refresh the projection cache from The Odds API.

use chrono::Local;
use std::path::PathBuf;

use crate::{
    projections::ScoringFormat,
    storage::{write_projection_cache, ProjectionCache},
    Result,
};

use super::{
    common::{FetchParams, ProjectionContext},
    resolve_cache_path,
};

/// Fetch props, project every configured format, and write the cache.
///
/// Returns the cache that was written.
pub async fn handle_update(
    params: FetchParams,
    cache_file: Option<PathBuf>,
) -> Result<ProjectionCache> {
    let path = resolve_cache_path(cache_file);
    let ctx = ProjectionContext::new(params.scoring_config.as_deref(), params.season_start)?;
    let formats: Vec<&ScoringFormat> = ctx.config.formats.iter().collect();

    println!("🏈 Fetching player props from The Odds API...");
    let projections = ctx.fetch_projections(&params, &formats).await?;

    let cache = ProjectionCache::new(projections, ctx.config.format_keys(), &Local::now());
    write_projection_cache(&path, &cache)?;

    println!(
        "✅ Successfully cached {} projections for {} players",
        cache.projection_count, cache.total_players
    );
    println!("📁 Saved to: {}", path.display());
    println!("🕐 Last updated: {}", cache.last_updated_display);

    Ok(cache)
}
