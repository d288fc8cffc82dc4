//! Show command: read-only view over the projection cache.

use std::{collections::BTreeSet, path::PathBuf};

use serde::Serialize;

use crate::{
    cli::types::{GameWeek, Position},
    projections::{Projection, ScoringConfig},
    storage::{read_projection_cache, ProjectionCache},
    Result, VegasError,
};

use super::{
    display::{format_detailed_projection, format_ranked_list},
    resolve_cache_path,
};

/// Filters applied to cached projections.
#[derive(Debug, Clone, Default)]
pub struct ShowFilters {
    pub format: Option<String>,
    pub positions: Option<Vec<Position>>,
    pub player_names: Option<Vec<String>>,
    pub week: Option<GameWeek>,
    pub limit: Option<usize>,
}

impl ShowFilters {
    fn matches(&self, projection: &Projection) -> bool {
        if let Some(format) = &self.format {
            if !projection.format.eq_ignore_ascii_case(format.trim()) {
                return false;
            }
        }

        if let Some(positions) = self.positions.as_ref().filter(|p| !p.is_empty()) {
            if !positions.contains(&projection.position) {
                return false;
            }
        }

        if let Some(names) = self.player_names.as_ref().filter(|n| !n.is_empty()) {
            let player = projection.player.to_lowercase();
            if !names
                .iter()
                .any(|name| player.contains(&name.trim().to_lowercase()))
            {
                return false;
            }
        }

        if let Some(week) = self.week {
            if projection.week != week {
                return false;
            }
        }

        true
    }
}

/// Cached projections that pass every filter, in cache (ranked) order.
pub fn filter_projections<'a>(
    projections: &'a [Projection],
    filters: &ShowFilters,
) -> Vec<&'a Projection> {
    projections
        .iter()
        .filter(|p| filters.matches(p))
        .take(filters.limit.unwrap_or(usize::MAX))
        .collect()
}

/// JSON body of `show --json`: the filtered projections plus cache metadata.
#[derive(Debug, Serialize)]
pub struct ShowOutput<'a> {
    pub projections: Vec<&'a Projection>,
    pub total_players: usize,
    pub projection_count: usize,
    pub formats: &'a [String],
    pub last_updated: &'a str,
    pub last_updated_display: &'a str,
}

impl<'a> ShowOutput<'a> {
    /// Counts describe `selected`, not the whole cache.
    pub fn new(cache: &'a ProjectionCache, selected: Vec<&'a Projection>) -> Self {
        let players: BTreeSet<&str> = selected.iter().map(|p| p.player.as_str()).collect();
        Self {
            total_players: players.len(),
            projection_count: selected.len(),
            projections: selected,
            formats: &cache.formats,
            last_updated: &cache.last_updated,
            last_updated_display: &cache.last_updated_display,
        }
    }
}

/// Parameters for the show command.
#[derive(Debug, Clone, Default)]
pub struct ShowParams {
    pub cache_file: Option<PathBuf>,
    pub filters: ShowFilters,
    pub as_json: bool,
    pub detailed: bool,
    pub scoring_config: Option<PathBuf>,
}

/// Handle the show command
pub fn handle_show(params: ShowParams) -> Result<()> {
    let path = resolve_cache_path(params.cache_file);
    let cache = read_projection_cache(&path)?;
    let config = ScoringConfig::load(params.scoring_config.as_deref())?;

    if let Some(format) = &params.filters.format {
        if !cache
            .formats
            .iter()
            .any(|f| f.eq_ignore_ascii_case(format.trim()))
        {
            return Err(VegasError::UnknownFormat {
                name: format.clone(),
            });
        }
    }

    let selected = filter_projections(&cache.projections, &params.filters);

    if params.as_json {
        let output = ShowOutput::new(&cache, selected);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Last updated: {}", cache.last_updated_display);
    println!(
        "{} players, {} projections ({})",
        cache.total_players,
        cache.projection_count,
        cache.formats.join(", ")
    );
    println!();

    if params.detailed {
        for projection in &selected {
            let precision = config.precision_for(&projection.format);
            println!("{}\n", format_detailed_projection(projection, precision));
        }
    } else {
        println!("{}", format_ranked_list(&selected, &config));
    }

    Ok(())
}
