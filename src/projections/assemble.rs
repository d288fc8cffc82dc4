//! Compose aggregation, estimation and scoring into the projection list.

use std::collections::BTreeMap;

use crate::projections::aggregate::aggregate_player;
use crate::projections::estimate::{estimate_stat_line, EstimationRatios};
use crate::projections::position::detect_position;
use crate::projections::scoring::{score, ScoringFormat};
use crate::projections::types::{PlayerProps, Projection};
use crate::projections::week::NflCalendar;


/// Build one projection per player per format.
///
/// Players whose stat line is empty after estimation are left out. The
/// result is ordered by total points (highest first); ties keep player-name
/// order and then the order of `formats`, so identical input always gives
/// identical output.
pub fn assemble_projections(
    players: &BTreeMap<String, PlayerProps>,
    formats: &[&ScoringFormat],
    ratios: &EstimationRatios,
    calendar: &NflCalendar,
) -> Vec<Projection> {
    let mut projections = Vec::with_capacity(players.len() * formats.len());

    for props in players.values() {
        let consensus = aggregate_player(props);
        let stats = estimate_stat_line(&consensus, ratios);
        if stats.is_empty() {
            log::debug!("skipping {}: no usable props", props.name);
            continue;
        }

        let position = detect_position(&props.name, &consensus);
        let week = calendar.week_for(props.game.commence_time.as_deref());
        let matchup = props.game.matchup();

        for format in formats {
            let scored = score(&stats, format);
            projections.push(Projection {
                player: props.name.clone(),
                position,
                week,
                matchup: matchup.clone(),
                game_time: props.game.commence_time.clone(),
                format: format.key.clone(),
                total_points: scored.total_points,
                breakdown: scored.breakdown,
                stats: stats.clone(),
            });
        }
    }

    projections.sort_by(|a, b| b.total_points.total_cmp(&a.total_points));
    projections
}

/// Number of distinct players in a projection list.
pub fn count_players(projections: &[Projection]) -> usize {
    let mut names: Vec<&str> = projections.iter().map(|p| p.player.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    names.len()
}
