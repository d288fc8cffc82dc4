//! Infer a player's position from the props they are quoted in.

use crate::cli::types::Position;
use crate::projections::aggregate::consensus_value;
use crate::projections::types::{ConsensusStat, PropMarket};

/// Surname fragments of tight ends whose receiving lines look like WR lines.
const TIGHT_END_KEYWORDS: &[&str] = &[
    "kelce", "kittle", "andrews", "pitts", "goedert", "hockenson", "schultz", "ertz", "engram",
    "kmet", "kincaid", "laporta", "njoku", "freiermuth", "henry", "gesicki", "tonyan", "bates",
    "likely", "gray", "everett", "conklin", "hooper", "uzomah", "thomas", "dulcich", "bellinger",
    "otton", "kraft", "ferguson",
];

fn has_any(stats: &[ConsensusStat], markets: &[PropMarket]) -> bool {
    markets.iter().any(|m| consensus_value(stats, *m).is_some())
}

/// Position guess for a player given their consensus props.
///
/// Passing props mean QB. Rushing props mean RB unless the player is clearly
/// a receiver. Receiving-only players are WR unless the name or the
/// short, high-volume catch profile points to a tight end.
pub fn detect_position(player: &str, stats: &[ConsensusStat]) -> Position {
    if has_any(
        stats,
        &[
            PropMarket::PassYards,
            PropMarket::PassTds,
            PropMarket::PassInterceptions,
        ],
    ) {
        return Position::QB;
    }

    let has_rush = has_any(
        stats,
        &[
            PropMarket::RushYards,
            PropMarket::RushAttempts,
            PropMarket::RushTds,
        ],
    );
    let has_rec = has_any(
        stats,
        &[
            PropMarket::Receptions,
            PropMarket::ReceptionYards,
            PropMarket::ReceptionTds,
        ],
    );

    let rush_yds = consensus_value(stats, PropMarket::RushYards).unwrap_or(0.0);
    let rec_yds = consensus_value(stats, PropMarket::ReceptionYards).unwrap_or(0.0);
    let receptions = consensus_value(stats, PropMarket::Receptions).unwrap_or(0.0);

    if has_rush && (!has_rec || rush_yds > rec_yds || rush_yds > 30.0) {
        return Position::RB;
    }

    if has_rec {
        let name = player.to_lowercase();
        if TIGHT_END_KEYWORDS.iter().any(|k| name.contains(k)) {
            return Position::TE;
        }

        let yards_per_catch = if receptions > 0.0 {
            rec_yds / receptions
        } else {
            0.0
        };

        if rec_yds < 25.0 && yards_per_catch < 8.0 && receptions >= 3.0 {
            return Position::TE;
        }
        if (25.0..35.0).contains(&rec_yds) && yards_per_catch < 7.0 && receptions >= 4.0 {
            return Position::TE;
        }
    }

    Position::WR
}
