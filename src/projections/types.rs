use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use crate::cli::types::{GameWeek, Position};
use crate::error::VegasError;

/// Player prop markets the projection core understands.
///
/// Serialized with The Odds API market keys (`player_pass_yds`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PropMarket {
    #[serde(rename = "player_pass_yds")]
    PassYards,
    #[serde(rename = "player_pass_tds")]
    PassTds,
    #[serde(rename = "player_pass_interceptions")]
    PassInterceptions,
    #[serde(rename = "player_rush_yds")]
    RushYards,
    #[serde(rename = "player_rush_attempts")]
    RushAttempts,
    #[serde(rename = "player_rush_tds")]
    RushTds,
    #[serde(rename = "player_receptions")]
    Receptions,
    #[serde(rename = "player_reception_yds")]
    ReceptionYards,
    #[serde(rename = "player_reception_tds")]
    ReceptionTds,
}

/// Markets requested by `update` when none are given on the command line.
pub const DEFAULT_MARKETS: [PropMarket; 5] = [
    PropMarket::PassYards,
    PropMarket::PassTds,
    PropMarket::RushYards,
    PropMarket::Receptions,
    PropMarket::ReceptionYards,
];

impl PropMarket {
    pub const ALL: [PropMarket; 9] = [
        PropMarket::PassYards,
        PropMarket::PassTds,
        PropMarket::PassInterceptions,
        PropMarket::RushYards,
        PropMarket::RushAttempts,
        PropMarket::RushTds,
        PropMarket::Receptions,
        PropMarket::ReceptionYards,
        PropMarket::ReceptionTds,
    ];

    /// Market key as used by The Odds API.
    pub fn key(&self) -> &'static str {
        match self {
            PropMarket::PassYards => "player_pass_yds",
            PropMarket::PassTds => "player_pass_tds",
            PropMarket::PassInterceptions => "player_pass_interceptions",
            PropMarket::RushYards => "player_rush_yds",
            PropMarket::RushAttempts => "player_rush_attempts",
            PropMarket::RushTds => "player_rush_tds",
            PropMarket::Receptions => "player_receptions",
            PropMarket::ReceptionYards => "player_reception_yds",
            PropMarket::ReceptionTds => "player_reception_tds",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }

    /// The stat a quoted line for this market fills in directly.
    pub fn stat(&self) -> Stat {
        match self {
            PropMarket::PassYards => Stat::PassYards,
            PropMarket::PassTds => Stat::PassTds,
            PropMarket::PassInterceptions => Stat::Interceptions,
            PropMarket::RushYards => Stat::RushYards,
            PropMarket::RushAttempts => Stat::RushAttempts,
            PropMarket::RushTds => Stat::RushTds,
            PropMarket::Receptions => Stat::Receptions,
            PropMarket::ReceptionYards => Stat::RecYards,
            PropMarket::ReceptionTds => Stat::RecTds,
        }
    }
}

impl fmt::Display for PropMarket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PropMarket {
    type Err = VegasError;

    /// Accepts the full API key (`player_pass_yds`) or the short form (`pass_yds`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        PropMarket::from_key(&key)
            .or_else(|| PropMarket::from_key(&format!("player_{key}")))
            .ok_or_else(|| VegasError::UnknownMarket { key: s.to_string() })
    }
}

/// One bookmaker's line for one player and market.
#[derive(Debug, Clone, PartialEq)]
pub struct PropLine {
    pub player: String,
    pub market: PropMarket,
    pub bookmaker: String,
    pub value: f64,
}

/// A single bookmaker quote once grouped under its player and market.
#[derive(Debug, Clone, PartialEq)]
pub struct PropQuote {
    pub bookmaker: String,
    pub value: f64,
}

/// Game context for the event a player's props were quoted in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameInfo {
    pub home_team: String,
    pub away_team: String,
    pub commence_time: Option<String>,
}

impl GameInfo {
    /// `"Away @ Home"`, or `"TBD"` when either side is unknown.
    pub fn matchup(&self) -> String {
        if self.home_team.is_empty() || self.away_team.is_empty() {
            "TBD".to_string()
        } else {
            format!("{} @ {}", self.away_team, self.home_team)
        }
    }
}

/// Every quote collected for one player, grouped by market.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerProps {
    pub name: String,
    pub game: GameInfo,
    pub quotes: BTreeMap<PropMarket, Vec<PropQuote>>,
}

impl PlayerProps {
    pub fn new(name: impl Into<String>, game: GameInfo) -> Self {
        Self {
            name: name.into(),
            game,
            quotes: BTreeMap::new(),
        }
    }

    pub fn add_quote(&mut self, market: PropMarket, bookmaker: impl Into<String>, value: f64) {
        self.quotes.entry(market).or_default().push(PropQuote {
            bookmaker: bookmaker.into(),
            value,
        });
    }
}

/// Consensus line for one player and market, averaged across bookmakers.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsensusStat {
    pub player: String,
    pub market: PropMarket,
    pub value: f64,
}

/// Counting stats a projection is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    PassYards,
    PassTds,
    Interceptions,
    RushYards,
    RushAttempts,
    RushTds,
    Receptions,
    RecYards,
    RecTds,
    Fumbles,
}

impl Stat {
    pub fn label(&self) -> &'static str {
        match self {
            Stat::PassYards => "Pass Yards",
            Stat::PassTds => "Pass TDs",
            Stat::Interceptions => "Interceptions",
            Stat::RushYards => "Rush Yards",
            Stat::RushAttempts => "Rush Attempts",
            Stat::RushTds => "Rush TDs",
            Stat::Receptions => "Receptions",
            Stat::RecYards => "Receiving Yards",
            Stat::RecTds => "Receiving TDs",
            Stat::Fumbles => "Fumbles Lost",
        }
    }
}

/// A player's projected stat line after estimation.
///
/// Stats that were neither quoted nor estimable are absent and read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatLine {
    values: BTreeMap<Stat, f64>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    estimated: BTreeSet<Stat>,
}

impl StatLine {
    pub fn get(&self, stat: Stat) -> f64 {
        self.values.get(&stat).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, stat: Stat) -> bool {
        self.values.contains_key(&stat)
    }

    pub fn is_estimated(&self, stat: Stat) -> bool {
        self.estimated.contains(&stat)
    }

    /// Record a directly quoted value, replacing any estimate.
    pub fn set_quoted(&mut self, stat: Stat, value: f64) {
        self.values.insert(stat, value);
        self.estimated.remove(&stat);
    }

    /// Record an estimate. A quoted value for the same stat is kept.
    pub fn set_estimated(&mut self, stat: Stat, value: f64) {
        if self.contains(stat) {
            return;
        }
        self.values.insert(stat, value);
        self.estimated.insert(stat);
    }

    /// True when no stat carries a non-zero value.
    pub fn is_empty(&self) -> bool {
        self.values.values().all(|v| *v == 0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stat, f64)> + '_ {
        self.values.iter().map(|(s, v)| (*s, *v))
    }
}

/// Fantasy points per scoring category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub passing: f64,
    pub rushing: f64,
    pub receiving: f64,
    pub fumbles: f64,
}

impl Breakdown {
    pub fn total(&self) -> f64 {
        self.passing + self.rushing + self.receiving + self.fumbles
    }

    pub fn categories(&self) -> [(&'static str, f64); 4] {
        [
            ("Passing", self.passing),
            ("Rushing", self.rushing),
            ("Receiving", self.receiving),
            ("Fumbles", self.fumbles),
        ]
    }
}

/// One player's projection under one scoring format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub player: String,
    pub position: Position,
    pub week: GameWeek,
    pub matchup: String,
    #[serde(default)]
    pub game_time: Option<String>,
    pub format: String,
    pub total_points: f64,
    pub breakdown: Breakdown,
    pub stats: StatLine,
}
