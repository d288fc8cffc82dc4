//! Client for The Odds API v4.

use reqwest::Client;
use serde_json::Value;

use crate::core::{common_headers, quota_header};
use crate::odds::types::{Event, EventOdds};
use crate::projections::types::{PropMarket, DEFAULT_MARKETS};
use crate::{Result, VegasError};

#[cfg(test)]
mod tests;

/// Base path for The Odds API v4.
pub const ODDS_API_BASE_URL: &str = "https://api.the-odds-api.com/v4";

pub const DEFAULT_SPORT: &str = "americanfootball_nfl";
pub const DEFAULT_REGIONS: &str = "us";

/// What to ask The Odds API for.
#[derive(Debug, Clone, PartialEq)]
pub struct PropsRequest {
    pub sport: String,
    pub regions: String,
    pub markets: Vec<PropMarket>,
}

impl Default for PropsRequest {
    fn default() -> Self {
        Self {
            sport: DEFAULT_SPORT.to_string(),
            regions: DEFAULT_REGIONS.to_string(),
            markets: DEFAULT_MARKETS.to_vec(),
        }
    }
}

impl PropsRequest {
    /// Comma-separated market keys for the `markets` query parameter.
    pub fn markets_param(&self) -> String {
        self.markets
            .iter()
            .map(|m| m.key())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Thin async wrapper over the endpoints the projection update needs.
#[derive(Debug, Clone)]
pub struct OddsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OddsClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, ODDS_API_BASE_URL)
    }

    /// Client against a different host (used to point tests at a mock server).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .default_headers(common_headers()?)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("GET {}", url);

        let res = self
            .client
            .get(&url)
            .query(&[("apiKey", self.api_key.as_str())])
            .query(params)
            .send()
            .await?
            .error_for_status()?;

        if let Some(remaining) = quota_header(res.headers(), "x-requests-remaining") {
            log::info!("Odds API requests remaining: {}", remaining);
        }

        let body = res.text().await?;
        Ok(serde_json::from_str::<Value>(&body)?)
    }

    /// Upcoming events for a sport. Entries without an id are dropped.
    pub async fn get_events(&self, request: &PropsRequest) -> Result<Vec<Event>> {
        let endpoint = format!("sports/{}/events", request.sport);
        let params = [("regions", request.regions.clone())];
        let raw = self.get_json(&endpoint, &params).await?;

        let Value::Array(items) = raw else {
            return Err(VegasError::NoData {
                context: format!("events response for {} was not a list", request.sport),
            });
        };

        Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value::<Event>(item).ok())
            .collect())
    }

    /// Player prop odds for one event.
    pub async fn get_event_odds(&self, request: &PropsRequest, event_id: &str) -> Result<EventOdds> {
        let endpoint = format!("sports/{}/events/{}/odds", request.sport, event_id);
        let params = [
            ("regions", request.regions.clone()),
            ("oddsFormat", "decimal".to_string()),
            ("markets", request.markets_param()),
        ];
        let raw = self.get_json(&endpoint, &params).await?;
        Ok(serde_json::from_value(raw)?)
    }
}

/// Fetch prop odds for every upcoming event, one request at a time.
///
/// An event whose payload cannot be decoded is skipped with a warning;
/// transport and HTTP status errors abort the run.
pub async fn fetch_event_odds(
    client: &OddsClient,
    request: &PropsRequest,
    verbose: bool,
) -> Result<Vec<EventOdds>> {
    let events = client.get_events(request).await?;
    if events.is_empty() {
        return Err(VegasError::NoData {
            context: format!("no upcoming {} events", request.sport),
        });
    }
    if verbose {
        println!("✓ Found {} events", events.len());
    }

    let mut all_odds = Vec::with_capacity(events.len());
    for event in &events {
        match client.get_event_odds(request, &event.id).await {
            Ok(odds) => all_odds.push(odds),
            Err(VegasError::Json(e)) => {
                log::warn!("skipping event {}: malformed odds payload: {}", event.id, e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(all_odds)
}
