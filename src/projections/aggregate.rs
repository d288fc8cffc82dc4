//! Consensus lines across bookmakers.

use crate::projections::types::{ConsensusStat, PlayerProps, PropMarket, PropQuote};

/// Arithmetic mean of the quoted lines, or `None` when nothing was quoted.
///
/// No outlier rejection: every bookmaker counts equally.
pub fn consensus_line(quotes: &[PropQuote]) -> Option<f64> {
    if quotes.is_empty() {
        return None;
    }
    let sum: f64 = quotes.iter().map(|q| q.value).sum();
    Some(sum / quotes.len() as f64)
}

/// One consensus stat per market that has at least one quote, in market order.
pub fn aggregate_player(props: &PlayerProps) -> Vec<ConsensusStat> {
    props
        .quotes
        .iter()
        .filter_map(|(market, quotes)| {
            consensus_line(quotes).map(|value| ConsensusStat {
                player: props.name.clone(),
                market: *market,
                value,
            })
        })
        .collect()
}

/// Look up the consensus value for a market.
pub fn consensus_value(stats: &[ConsensusStat], market: PropMarket) -> Option<f64> {
    stats.iter().find(|s| s.market == market).map(|s| s.value)
}
