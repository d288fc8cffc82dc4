//! Formats command: list the configured scoring formats.

use std::path::Path;

use crate::{projections::ScoringConfig, Result};

/// One line per format with its key coefficients.
pub fn format_scoring_formats(config: &ScoringConfig) -> String {
    let mut lines = vec![
        format!(
            "{:<10} {:<22} {:>5} {:>8} {:>8} {:>8}",
            "Key", "Name", "Rec", "PassTD", "RushTD", "RecTD"
        ),
        format!(
            "{:<10} {:<22} {:>5} {:>8} {:>8} {:>8}",
            "---", "----", "---", "------", "------", "-----"
        ),
    ];
    for f in &config.formats {
        lines.push(format!(
            "{:<10} {:<22} {:>5} {:>8} {:>8} {:>8}",
            f.key,
            f.name,
            f.receiving.receptions,
            f.passing.touchdowns,
            f.rushing.touchdowns,
            f.receiving.touchdowns
        ));
    }
    lines.join("\n")
}

/// Handle the formats command
pub fn handle_formats(scoring_config: Option<&Path>, as_json: bool) -> Result<()> {
    let config = ScoringConfig::load(scoring_config)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config.formats)?);
    } else {
        println!("{}", format_scoring_formats(&config));
    }

    Ok(())
}
