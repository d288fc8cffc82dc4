//! Map Odds API responses onto typed prop lines.

use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

use crate::odds::types::EventOdds;
use crate::projections::types::{GameInfo, PlayerProps, PropLine, PropMarket};

/// Validate a quoted line. Only finite, strictly positive numbers are usable;
/// anything else (strings, nulls, zero) is rejected.
pub fn parse_line_value(point: &Value) -> Option<f64> {
    point.as_f64().filter(|v| v.is_finite() && *v > 0.0)
}

/// Game context carried by an odds payload.
pub fn game_info(event: &EventOdds) -> GameInfo {
    GameInfo {
        home_team: event.home_team.clone().unwrap_or_default(),
        away_team: event.away_team.clone().unwrap_or_default(),
        commence_time: event.commence_time.clone(),
    }
}

/// Every usable prop line in one event.
///
/// Unknown markets, outcomes without a player, and malformed lines are
/// skipped one at a time. Each bookmaker contributes at most one line per
/// player and market; the Over and Under outcomes share the same point.
pub fn parse_event_props(event: &EventOdds) -> Vec<PropLine> {
    let mut lines = Vec::new();
    let mut seen: BTreeSet<(String, PropMarket, String)> = BTreeSet::new();

    for bookmaker in &event.bookmakers {
        let Some(book_name) = bookmaker.name() else {
            log::debug!("skipping bookmaker without key or title");
            continue;
        };

        for market in &bookmaker.markets {
            let Some(prop_market) = PropMarket::from_key(&market.key) else {
                log::debug!("ignoring unsupported market {}", market.key);
                continue;
            };

            for outcome in &market.outcomes {
                let Some(player) = outcome
                    .description
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                else {
                    continue;
                };

                let Some(value) = outcome.point.as_ref().and_then(parse_line_value) else {
                    log::debug!(
                        "rejecting {} line for {} from {}: {:?}",
                        prop_market,
                        player,
                        book_name,
                        outcome.point
                    );
                    continue;
                };

                let key = (book_name.to_string(), prop_market, player.to_string());
                if !seen.insert(key) {
                    continue;
                }

                lines.push(PropLine {
                    player: player.to_string(),
                    market: prop_market,
                    bookmaker: book_name.to_string(),
                    value,
                });
            }
        }
    }

    lines
}

/// Group the prop lines of every event by player.
///
/// A player quoted in more than one event keeps the props of the last one.
pub fn group_player_props(events: &[EventOdds]) -> BTreeMap<String, PlayerProps> {
    let mut players = BTreeMap::new();

    for event in events {
        let game = game_info(event);
        let mut event_players: BTreeMap<String, PlayerProps> = BTreeMap::new();

        for line in parse_event_props(event) {
            event_players
                .entry(line.player.clone())
                .or_insert_with(|| PlayerProps::new(line.player.clone(), game.clone()))
                .add_quote(line.market, line.bookmaker, line.value);
        }

        players.extend(event_players);
    }

    players
}
