//! Vegas Fantasy Football Projections Library
//!
//! Turns NFL player props from The Odds API into fantasy-point projections
//! for several scoring formats, and caches the result for a read-only
//! serving path.
//!
//! ## Features
//!
//! - **Odds Ingestion**: Fetch player props per event and validate every quote
//! - **Consensus Lines**: Average each prop across bookmakers
//! - **Stat Estimation**: Fill in touchdowns and fumbles that have no direct prop
//! - **Flexible Scoring**: PPR, Half-PPR and Standard, or formats from a JSON file
//! - **Projection Cache**: Atomic JSON cache consumed by the `show` command
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use vegas_ffl::projections::{
//!     assemble_projections, EstimationRatios, GameInfo, NflCalendar, PlayerProps, PropMarket,
//!     ScoringFormat,
//! };
//!
//! let mut props = PlayerProps::new("Test QB", GameInfo::default());
//! props.add_quote(PropMarket::PassYards, "DraftKings", 280.0);
//! props.add_quote(PropMarket::PassYards, "FanDuel", 300.0);
//! props.add_quote(PropMarket::PassTds, "DraftKings", 2.0);
//!
//! let players = BTreeMap::from([(props.name.clone(), props)]);
//! let standard = ScoringFormat::standard();
//! let projections = assemble_projections(
//!     &players,
//!     &[&standard],
//!     &EstimationRatios::default(),
//!     &NflCalendar::default(),
//! );
//!
//! assert!((projections[0].total_points - 19.6).abs() < 1e-9);
//! ```
//!
//! ## Environment Configuration
//!
//! Set your Odds API key to avoid passing it in every command (a `.env`
//! file in the working directory is also read):
//! ```bash
//! export ODDS_API_KEY=your-key
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod odds;
pub mod projections;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{GameWeek, Position};
pub use error::{Result, VegasError};
pub use projections::{Projection, ScoringConfig, ScoringFormat};
pub use storage::ProjectionCache;

pub const ODDS_API_KEY_ENV_VAR: &str = "ODDS_API_KEY";
pub const CACHE_FILE_ENV_VAR: &str = "VEGAS_FFL_CACHE_FILE";
