//! The Odds API ingestion boundary.
//!
//! - `http`: async client and the sequential per-event fetch loop
//! - `types`: response records, decoded leniently
//! - `parse`: validation and grouping into typed player props

pub mod http;
pub mod parse;
pub mod types;

pub use http::{fetch_event_odds, OddsClient, PropsRequest, ODDS_API_BASE_URL};
pub use parse::{group_player_props, parse_event_props};
pub use types::{Bookmaker, Event, EventOdds, Market, Outcome};
