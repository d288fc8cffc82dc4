//! Fantasy football position types and utilities.

use crate::error::VegasError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Offensive skill positions that player props are published for.
///
/// Props carry no roster metadata, so the position is inferred from the set
/// of markets a player is quoted in (see
/// [`detect_position`](crate::projections::position::detect_position)).
///
/// # Examples
///
/// ```rust
/// use vegas_ffl::Position;
///
/// let qb: Position = "qb".parse().unwrap();
/// assert_eq!(qb, Position::QB);
/// assert_eq!(Position::TE.to_string(), "TE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = VegasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            _ => Err(VegasError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
