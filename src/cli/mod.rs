//! CLI argument definitions and parsing.

pub mod types;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::odds::http::{DEFAULT_REGIONS, DEFAULT_SPORT};
use crate::projections::PropMarket;
use types::{GameWeek, Position};

/// Arguments shared by the commands that call The Odds API.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// The Odds API key (or set `ODDS_API_KEY` env var).
    #[clap(long)]
    pub api_key: Option<String>,

    /// Sport key.
    #[clap(long, short, default_value = DEFAULT_SPORT)]
    pub sport: String,

    /// Bookmaker regions, comma separated.
    #[clap(long, default_value = DEFAULT_REGIONS)]
    pub regions: String,

    /// Prop markets to fetch (repeatable or comma separated): `-m pass_yds,receptions`.
    #[clap(long, short, value_delimiter = ',')]
    pub markets: Option<Vec<PropMarket>>,

    /// JSON file overriding the built-in scoring formats and estimation ratios.
    #[clap(long)]
    pub scoring_config: Option<PathBuf>,

    /// Kickoff date of week 1 (YYYY-MM-DD), used to label game weeks.
    #[clap(long)]
    pub season_start: Option<NaiveDate>,

    /// Alternate Odds API base URL.
    #[clap(long)]
    pub base_url: Option<String>,

    /// Print progress while fetching.
    #[clap(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
#[clap(
    name = "vegas-ffl",
    version,
    about = "Fantasy football projections from Vegas player props"
)]
pub struct VegasFfl {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch props, project every configured format, and write the cache.
    Update {
        #[clap(flatten)]
        fetch: FetchArgs,

        /// Cache file (or set `VEGAS_FFL_CACHE_FILE` env var).
        #[clap(long)]
        cache_file: Option<PathBuf>,
    },

    /// Fetch props and print projections without touching the cache.
    Project {
        #[clap(flatten)]
        fetch: FetchArgs,

        /// Scoring format (default: all formats).
        #[clap(long, short)]
        format: Option<String>,

        /// Show a detailed breakdown for each projection.
        #[clap(long, short)]
        detailed: bool,

        /// Write projections to this JSON file instead of printing them.
        #[clap(long, short)]
        output: Option<PathBuf>,
    },

    /// Print projections from the cache written by `update`.
    Show {
        /// Cache file (or set `VEGAS_FFL_CACHE_FILE` env var).
        #[clap(long)]
        cache_file: Option<PathBuf>,

        /// Only this scoring format.
        #[clap(long, short)]
        format: Option<String>,

        /// Filter by position (repeatable): `-p QB -p RB`.
        #[clap(short = 'p', long = "position")]
        positions: Option<Vec<Position>>,

        /// Filter by player name (substring match) - repeatable: `-n Allen -n Kelce`.
        #[clap(long, short = 'n')]
        player_name: Option<Vec<String>>,

        /// Filter by game week: `Week 7`, `7`, or `TBD`.
        #[clap(long, short)]
        week: Option<GameWeek>,

        /// Show at most this many projections.
        #[clap(long, short)]
        limit: Option<usize>,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,

        /// Show a detailed breakdown for each projection.
        #[clap(long, short)]
        detailed: bool,

        /// Scoring config used for display precision.
        #[clap(long)]
        scoring_config: Option<PathBuf>,
    },

    /// List the configured scoring formats.
    Formats {
        /// JSON file overriding the built-in scoring formats.
        #[clap(long)]
        scoring_config: Option<PathBuf>,

        /// Output the formats as JSON.
        #[clap(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        VegasFfl::command().debug_assert();
    }

    #[test]
    fn test_parse_update_defaults() {
        let app = VegasFfl::try_parse_from(["vegas-ffl", "update"]).unwrap();
        match app.command {
            Commands::Update { fetch, cache_file } => {
                assert_eq!(fetch.sport, "americanfootball_nfl");
                assert_eq!(fetch.regions, "us");
                assert!(fetch.markets.is_none());
                assert!(fetch.api_key.is_none());
                assert!(!fetch.verbose);
                assert!(cache_file.is_none());
            }
            other => panic!("Expected Update, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_project_markets_and_season_start() {
        let app = VegasFfl::try_parse_from([
            "vegas-ffl",
            "project",
            "-m",
            "pass_yds,player_pass_tds",
            "--markets",
            "receptions",
            "--season-start",
            "2026-09-10",
            "-f",
            "ppr",
            "--detailed",
        ])
        .unwrap();

        match app.command {
            Commands::Project {
                fetch,
                format,
                detailed,
                output,
            } => {
                assert_eq!(
                    fetch.markets,
                    Some(vec![
                        PropMarket::PassYards,
                        PropMarket::PassTds,
                        PropMarket::Receptions
                    ])
                );
                assert_eq!(
                    fetch.season_start,
                    NaiveDate::from_ymd_opt(2026, 9, 10)
                );
                assert_eq!(format.as_deref(), Some("ppr"));
                assert!(detailed);
                assert!(output.is_none());
            }
            other => panic!("Expected Project, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_show_filters() {
        let app = VegasFfl::try_parse_from([
            "vegas-ffl", "show", "-p", "qb", "-p", "TE", "-n", "allen", "-w", "7", "-l", "10",
            "--json",
        ])
        .unwrap();

        match app.command {
            Commands::Show {
                positions,
                player_name,
                week,
                limit,
                json,
                ..
            } => {
                assert_eq!(positions, Some(vec![Position::QB, Position::TE]));
                assert_eq!(player_name, Some(vec!["allen".to_string()]));
                assert_eq!(week, Some(GameWeek::Week(7)));
                assert_eq!(limit, Some(10));
                assert!(json);
            }
            other => panic!("Expected Show, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_market_is_rejected() {
        assert!(VegasFfl::try_parse_from(["vegas-ffl", "project", "-m", "player_anytime_td"]).is_err());
    }
}
