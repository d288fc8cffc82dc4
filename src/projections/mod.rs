//! Projection core: turn bookmaker prop lines into fantasy points.
//!
//! The pipeline runs leaves first:
//! - `aggregate`: consensus line per player and market
//! - `estimate`: fill in touchdowns and fumbles that have no direct prop
//! - `scoring`: scoring formats and the scoring engine
//! - `assemble`: per player, per format projections in ranked order
//!
//! `position` and `week` attach display metadata to each projection.

pub mod aggregate;
pub mod assemble;
pub mod estimate;
pub mod position;
pub mod scoring;
pub mod types;
pub mod week;

pub use assemble::{assemble_projections, count_players};
pub use estimate::EstimationRatios;
pub use scoring::{score, Score, ScoringConfig, ScoringFormat};
pub use types::{
    Breakdown, ConsensusStat, GameInfo, PlayerProps, Projection, PropLine, PropMarket, PropQuote,
    Stat, StatLine, DEFAULT_MARKETS,
};
pub use week::NflCalendar;
