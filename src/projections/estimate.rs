//! Fill in touchdown and fumble counts that have no direct prop.

use serde::{Deserialize, Serialize};

use crate::projections::types::{ConsensusStat, Stat, StatLine};

/// Historical ratios used to estimate stats that books rarely quote.
///
/// These are configuration values, not fitted parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationRatios {
    /// Rushing yards per rushing touchdown.
    #[serde(default = "default_rush_yards_per_td")]
    pub rush_yards_per_td: f64,
    /// Receiving yards per receiving touchdown.
    #[serde(default = "default_rec_yards_per_td")]
    pub rec_yards_per_td: f64,
    /// Touches (rush attempts + receptions) per lost fumble.
    #[serde(default = "default_touches_per_fumble")]
    pub touches_per_fumble: f64,
    /// Passing yards per passing touchdown. Unset means passing TDs are
    /// only ever taken from a direct prop.
    #[serde(default)]
    pub pass_yards_per_td: Option<f64>,
}

fn default_rush_yards_per_td() -> f64 {
    90.0
}

fn default_rec_yards_per_td() -> f64 {
    110.0
}

fn default_touches_per_fumble() -> f64 {
    200.0
}

impl Default for EstimationRatios {
    fn default() -> Self {
        Self {
            rush_yards_per_td: default_rush_yards_per_td(),
            rec_yards_per_td: default_rec_yards_per_td(),
            touches_per_fumble: default_touches_per_fumble(),
            pass_yards_per_td: None,
        }
    }
}

/// Build a player's stat line from consensus props, estimating what is missing.
///
/// Quoted props always win. A TD count is estimated from the matching yardage
/// only when no TD prop exists; fumbles are estimated from total touches.
/// Stats with nothing to estimate from stay absent (read as zero).
pub fn estimate_stat_line(stats: &[ConsensusStat], ratios: &EstimationRatios) -> StatLine {
    let mut line = StatLine::default();
    for s in stats {
        line.set_quoted(s.market.stat(), s.value);
    }

    estimate_per_unit(&mut line, Stat::PassTds, Stat::PassYards, ratios.pass_yards_per_td);
    estimate_per_unit(&mut line, Stat::RushTds, Stat::RushYards, Some(ratios.rush_yards_per_td));
    estimate_per_unit(&mut line, Stat::RecTds, Stat::RecYards, Some(ratios.rec_yards_per_td));

    if !line.contains(Stat::Fumbles) {
        let touches = line.get(Stat::RushAttempts) + line.get(Stat::Receptions);
        if touches > 0.0 && ratios.touches_per_fumble > 0.0 {
            line.set_estimated(Stat::Fumbles, touches / ratios.touches_per_fumble);
        }
    }

    line
}

fn estimate_per_unit(line: &mut StatLine, target: Stat, source: Stat, divisor: Option<f64>) {
    let Some(divisor) = divisor.filter(|d| *d > 0.0) else {
        return;
    };
    if line.contains(target) {
        return;
    }
    let source_value = line.get(source);
    if source_value > 0.0 {
        line.set_estimated(target, source_value / divisor);
    }
}
