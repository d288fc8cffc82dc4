//! Common helpers shared by the commands that fetch props.
//!
//! `update` and `project` run the same pipeline: load the scoring
//! configuration, pull every event's props from The Odds API, and assemble
//! projections. Only what they do with the result differs.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::{
    odds::{fetch_event_odds, group_player_props, OddsClient, PropsRequest},
    projections::{
        assemble_projections, NflCalendar, Projection, PropMarket, ScoringConfig, ScoringFormat,
    },
    Result, VegasError,
};

use super::resolve_api_key;

/// Options for fetching props, independent of how the CLI spells them.
#[derive(Debug, Clone, Default)]
pub struct FetchParams {
    pub api_key: Option<String>,
    pub sport: Option<String>,
    pub regions: Option<String>,
    pub markets: Option<Vec<PropMarket>>,
    pub scoring_config: Option<PathBuf>,
    pub season_start: Option<NaiveDate>,
    pub base_url: Option<String>,
    pub verbose: bool,
}

impl FetchParams {
    pub fn props_request(&self) -> PropsRequest {
        let mut request = PropsRequest::default();
        if let Some(sport) = &self.sport {
            request.sport = sport.clone();
        }
        if let Some(regions) = &self.regions {
            request.regions = regions.clone();
        }
        if let Some(markets) = self.markets.as_ref().filter(|m| !m.is_empty()) {
            request.markets = markets.clone();
        }
        request
    }
}

/// Scoring rules and week calendar a projection run works with.
#[derive(Debug, Clone, Default)]
pub struct ProjectionContext {
    pub config: ScoringConfig,
    pub calendar: NflCalendar,
}

impl ProjectionContext {
    pub fn new(scoring_config: Option<&Path>, season_start: Option<NaiveDate>) -> Result<Self> {
        let config = ScoringConfig::load(scoring_config)?;
        let calendar = season_start
            .map(NflCalendar::starting)
            .unwrap_or_default();
        Ok(Self { config, calendar })
    }

    /// Fetch every event's props and project them under `formats`.
    pub async fn fetch_projections(
        &self,
        params: &FetchParams,
        formats: &[&ScoringFormat],
    ) -> Result<Vec<Projection>> {
        let api_key = resolve_api_key(params.api_key.clone())?;
        let client = match &params.base_url {
            Some(url) => OddsClient::with_base_url(api_key, url.as_str())?,
            None => OddsClient::new(api_key)?,
        };
        let request = params.props_request();

        if params.verbose {
            println!("Fetching player props for {}...", request.sport);
            println!("Markets: {}", request.markets_param());
        }
        let events = fetch_event_odds(&client, &request, params.verbose).await?;

        let players = group_player_props(&events);
        if players.is_empty() {
            return Err(VegasError::NoData {
                context: "no player props found in the events".to_string(),
            });
        }
        if params.verbose {
            println!("✓ Parsed props for {} players", players.len());
            println!("Calculating projections...");
        }

        Ok(assemble_projections(
            &players,
            formats,
            &self.config.estimation,
            &self.calendar,
        ))
    }
}
