//! Scoring formats and the scoring engine.
//!
//! Formats are plain configuration: the built-in table carries PPR, HALF_PPR
//! and STANDARD, and a JSON file with the same shape can replace it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

use crate::core::try_read_to_string;
use crate::projections::estimate::EstimationRatios;
use crate::projections::types::{Breakdown, Stat, StatLine};
use crate::{Result, VegasError};


fn default_precision() -> usize {
    2
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassingRules {
    pub yards: f64,
    pub touchdowns: f64,
    pub interceptions: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RushingRules {
    pub yards: f64,
    pub touchdowns: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceivingRules {
    pub receptions: f64,
    pub yards: f64,
    pub touchdowns: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FumbleRules {
    pub lost: f64,
}

/// A named scoring rule set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringFormat {
    /// Short identifier written to the cache (`PPR`, `HALF_PPR`, ...).
    pub key: String,
    pub name: String,
    /// Decimal places shown to users. Points are stored unrounded.
    #[serde(default = "default_precision")]
    pub precision: usize,
    pub passing: PassingRules,
    pub rushing: RushingRules,
    pub receiving: ReceivingRules,
    pub fumbles: FumbleRules,
}

impl ScoringFormat {
    fn with_reception_bonus(key: &str, name: &str, receptions: f64) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            precision: default_precision(),
            passing: PassingRules {
                yards: 0.04,
                touchdowns: 4.0,
                interceptions: -2.0,
            },
            rushing: RushingRules {
                yards: 0.1,
                touchdowns: 6.0,
            },
            receiving: ReceivingRules {
                receptions,
                yards: 0.1,
                touchdowns: 6.0,
            },
            fumbles: FumbleRules { lost: -2.0 },
        }
    }

    pub fn ppr() -> Self {
        Self::with_reception_bonus("PPR", "Points Per Reception", 1.0)
    }

    pub fn half_ppr() -> Self {
        Self::with_reception_bonus("HALF_PPR", "Half Point Per Reception", 0.5)
    }

    pub fn standard() -> Self {
        Self::with_reception_bonus("STANDARD", "Standard (No PPR)", 0.0)
    }

    /// Format points for display at this format's precision.
    pub fn display_points(&self, points: f64) -> String {
        format!("{:.*}", self.precision, points)
    }

    fn validate(&self) -> Result<()> {
        if self.key.trim().is_empty() {
            return Err(VegasError::InvalidScoring {
                reason: "format key must not be empty".to_string(),
            });
        }
        if self.passing.interceptions > 0.0 {
            return Err(VegasError::InvalidScoring {
                reason: format!("{}: interceptions must be non-positive", self.key),
            });
        }
        if self.fumbles.lost > 0.0 {
            return Err(VegasError::InvalidScoring {
                reason: format!("{}: fumbles lost must be non-positive", self.key),
            });
        }
        Ok(())
    }
}

/// Points for one stat line under one format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub breakdown: Breakdown,
    pub total_points: f64,
}

/// Score a stat line. The total is the unrounded sum of the breakdown.
pub fn score(stats: &StatLine, format: &ScoringFormat) -> Score {
    let passing = stats.get(Stat::PassYards) * format.passing.yards
        + stats.get(Stat::PassTds) * format.passing.touchdowns
        + stats.get(Stat::Interceptions) * format.passing.interceptions;

    let rushing = stats.get(Stat::RushYards) * format.rushing.yards
        + stats.get(Stat::RushTds) * format.rushing.touchdowns;

    let receiving = stats.get(Stat::RecYards) * format.receiving.yards
        + stats.get(Stat::RecTds) * format.receiving.touchdowns
        + stats.get(Stat::Receptions) * format.receiving.receptions;

    let fumbles = stats.get(Stat::Fumbles) * format.fumbles.lost;

    let breakdown = Breakdown {
        passing,
        rushing,
        receiving,
        fumbles,
    };

    Score {
        total_points: breakdown.total(),
        breakdown,
    }
}

/// Scoring formats plus the estimation ratios shared by all of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub formats: Vec<ScoringFormat>,
    #[serde(default)]
    pub estimation: EstimationRatios,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            formats: vec![
                ScoringFormat::ppr(),
                ScoringFormat::half_ppr(),
                ScoringFormat::standard(),
            ],
            estimation: EstimationRatios::default(),
        }
    }
}

impl ScoringConfig {
    /// Load the config from a JSON file, or the built-in table when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let contents = try_read_to_string(path).ok_or_else(|| VegasError::InvalidScoring {
            reason: format!("cannot read {}", path.display()),
        })?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: ScoringConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.formats.is_empty() {
            return Err(VegasError::InvalidScoring {
                reason: "at least one scoring format is required".to_string(),
            });
        }

        let mut seen = BTreeSet::new();
        for format in &self.formats {
            format.validate()?;
            if !seen.insert(format.key.to_uppercase()) {
                return Err(VegasError::InvalidScoring {
                    reason: format!("duplicate format key {}", format.key),
                });
            }
        }

        let ratios = &self.estimation;
        let ratios_positive = [
            ratios.rush_yards_per_td,
            ratios.rec_yards_per_td,
            ratios.touches_per_fumble,
        ]
        .into_iter()
        .chain(ratios.pass_yards_per_td)
        .all(|r| r > 0.0);
        if !ratios_positive {
            return Err(VegasError::InvalidScoring {
                reason: "estimation ratios must be positive".to_string(),
            });
        }

        Ok(())
    }

    /// Case-insensitive lookup by format key.
    pub fn get_format(&self, name: &str) -> Option<&ScoringFormat> {
        self.formats
            .iter()
            .find(|f| f.key.eq_ignore_ascii_case(name.trim()))
    }

    pub fn format_keys(&self) -> Vec<String> {
        self.formats.iter().map(|f| f.key.clone()).collect()
    }

    /// All formats, or just the named one.
    pub fn select(&self, name: Option<&str>) -> Result<Vec<&ScoringFormat>> {
        match name {
            None => Ok(self.formats.iter().collect()),
            Some(name) => self
                .get_format(name)
                .map(|f| vec![f])
                .ok_or_else(|| VegasError::UnknownFormat {
                    name: name.to_string(),
                }),
        }
    }

    /// Display precision for a format key, falling back to two decimals.
    pub fn precision_for(&self, key: &str) -> usize {
        self.get_format(key)
            .map(|f| f.precision)
            .unwrap_or_else(default_precision)
    }
}
