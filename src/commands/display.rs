//! Text rendering for projections.

use std::collections::BTreeMap;

use crate::projections::{Projection, ScoringConfig};

const RULE_WIDTH: usize = 60;

/// Render rows as a bordered grid; columns from `numeric_from` on are right-aligned.
fn grid_table(headers: &[String], rows: &[Vec<String>], numeric_from: usize) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let border = |fill: char| {
        let mut line = String::from("+");
        for w in &widths {
            line.extend(std::iter::repeat(fill).take(w + 2));
            line.push('+');
        }
        line
    };
    let render_row = |cells: &[String]| {
        let mut line = String::from("|");
        for (i, w) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            if i >= numeric_from {
                line.push_str(&format!(" {:>w$} |", cell, w = w));
            } else {
                line.push_str(&format!(" {:<w$} |", cell, w = w));
            }
        }
        line
    };

    let mut lines = vec![border('-'), render_row(headers), border('=')];
    for row in rows {
        lines.push(render_row(row));
        lines.push(border('-'));
    }
    lines.join("\n")
}

/// Format keys present in `projections`, in configuration order.
fn format_columns(projections: &[Projection], config: &ScoringConfig) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for p in projections {
        if !keys.contains(&p.format) {
            keys.push(p.format.clone());
        }
    }
    let rank = |key: &str| {
        config
            .formats
            .iter()
            .position(|f| f.key == key)
            .unwrap_or(usize::MAX)
    };
    keys.sort_by(|a, b| rank(a).cmp(&rank(b)).then_with(|| a.cmp(b)));
    keys
}

/// One row per player with a points column per scoring format.
///
/// Players appear in the order of their first (highest ranked) projection.
pub fn format_projections_table(projections: &[Projection], config: &ScoringConfig) -> String {
    if projections.is_empty() {
        return "No projections available.".to_string();
    }

    let columns = format_columns(projections, config);
    let mut order: Vec<&str> = Vec::new();
    let mut points: BTreeMap<(&str, &str), f64> = BTreeMap::new();
    for p in projections {
        if !order.contains(&p.player.as_str()) {
            order.push(&p.player);
        }
        points.insert((p.player.as_str(), p.format.as_str()), p.total_points);
    }

    let mut headers = vec!["Player".to_string(), "Pos".to_string()];
    headers.extend(columns.iter().cloned());

    let rows: Vec<Vec<String>> = order
        .iter()
        .map(|player| {
            let position = projections
                .iter()
                .find(|p| p.player == *player)
                .map(|p| p.position.to_string())
                .unwrap_or_default();
            let mut row = vec![player.to_string(), position];
            for key in &columns {
                row.push(match points.get(&(*player, key.as_str())) {
                    Some(v) => format!("{:.*}", config.precision_for(key), v),
                    None => "-".to_string(),
                });
            }
            row
        })
        .collect();

    grid_table(&headers, &rows, 2)
}

/// Ranked, one line per projection.
pub fn format_ranked_list(projections: &[&Projection], config: &ScoringConfig) -> String {
    if projections.is_empty() {
        return "No projections available.".to_string();
    }

    let mut lines = vec![
        format!(
            "{:<4} {:<24} {:<4} {:<8} {:<9} {:>8}  Matchup",
            "#", "Player", "Pos", "Week", "Format", "Points"
        ),
        format!(
            "{:<4} {:<24} {:<4} {:<8} {:<9} {:>8}  -------",
            "-", "------", "---", "----", "------", "------"
        ),
    ];
    for (i, p) in projections.iter().enumerate() {
        lines.push(format!(
            "{:<4} {:<24} {:<4} {:<8} {:<9} {:>8}  {}",
            i + 1,
            p.player.chars().take(24).collect::<String>(),
            p.position.to_string(),
            p.week.to_string(),
            p.format,
            format!("{:.*}", config.precision_for(&p.format), p.total_points),
            p.matchup
        ));
    }
    lines.join("\n")
}

/// Full breakdown of one projection: category points and the stat line.
pub fn format_detailed_projection(projection: &Projection, precision: usize) -> String {
    let mut out = vec![
        "=".repeat(RULE_WIDTH),
        format!("Player: {} ({})", projection.player, projection.position),
        format!("Game: {} [{}]", projection.matchup, projection.week),
        format!("Format: {}", projection.format),
        format!(
            "Total Points: {:.*}",
            precision, projection.total_points
        ),
        "-".repeat(RULE_WIDTH),
        String::new(),
        "Points Breakdown:".to_string(),
    ];

    for (category, points) in projection.breakdown.categories() {
        if points != 0.0 {
            out.push(format!("  {}: {:.*}", category, precision, points));
        }
    }

    if !projection.stats.is_empty() {
        out.push(String::new());
        out.push("Projected Stats:".to_string());
        for (stat, value) in projection.stats.iter() {
            let marker = if projection.stats.is_estimated(stat) {
                " (est.)"
            } else {
                ""
            };
            out.push(format!("  {}: {:.2}{}", stat.label(), value, marker));
        }
    }

    out.push("=".repeat(RULE_WIDTH));
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::{GameWeek, Position};
    use crate::projections::{Breakdown, Stat, StatLine};

    fn projection(player: &str, position: Position, format: &str, points: f64) -> Projection {
        let mut stats = StatLine::default();
        stats.set_quoted(Stat::Receptions, 5.5);
        stats.set_quoted(Stat::RecYards, 58.5);
        stats.set_estimated(Stat::RecTds, 58.5 / 110.0);
        Projection {
            player: player.to_string(),
            position,
            week: GameWeek::Week(7),
            matchup: "Buffalo Bills @ Kansas City Chiefs".to_string(),
            game_time: None,
            format: format.to_string(),
            total_points: points,
            breakdown: Breakdown {
                receiving: points,
                ..Breakdown::default()
            },
            stats,
        }
    }

    #[test]
    fn test_empty_outputs() {
        let config = ScoringConfig::default();
        assert_eq!(
            format_projections_table(&[], &config),
            "No projections available."
        );
        assert_eq!(format_ranked_list(&[], &config), "No projections available.");
    }

    #[test]
    fn test_grid_table_layout() {
        let table = grid_table(
            &["Name".to_string(), "Pts".to_string()],
            &[vec!["Al".to_string(), "1.50".to_string()]],
            1,
        );
        let expected = "\
+------+------+
| Name |  Pts |
+======+======+
| Al   | 1.50 |
+------+------+";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_projections_table_groups_by_player() {
        let config = ScoringConfig::default();
        let projections = vec![
            projection("Travis Kelce", Position::TE, "PPR", 17.76),
            projection("Travis Kelce", Position::TE, "STANDARD", 12.26),
            projection("Khalil Shakir", Position::WR, "PPR", 11.0),
        ];

        let table = format_projections_table(&projections, &config);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[1].contains("Player"));
        assert!(lines[1].find("PPR").unwrap() < lines[1].find("STANDARD").unwrap());
        assert!(!lines[1].contains("HALF_PPR"));
        assert!(lines[3].starts_with("| Travis Kelce"));
        assert!(lines[3].contains("17.76") && lines[3].contains("12.26"));
        assert!(lines[5].starts_with("| Khalil Shakir"));
        assert!(lines[5].contains(" - |"));
    }

    #[test]
    fn test_ranked_list_numbers_rows() {
        let config = ScoringConfig::default();
        let a = projection("Travis Kelce", Position::TE, "PPR", 17.756);
        let b = projection("Khalil Shakir", Position::WR, "PPR", 11.0);

        let list = format_ranked_list(&[&a, &b], &config);
        let lines: Vec<&str> = list.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("1    Travis Kelce"));
        assert!(lines[2].contains("17.76"));
        assert!(lines[2].contains("Week 7"));
        assert!(lines[3].starts_with("2    Khalil Shakir"));
    }

    #[test]
    fn test_detailed_projection_marks_estimates() {
        let p = projection("Travis Kelce", Position::TE, "PPR", 17.76);
        let text = format_detailed_projection(&p, 2);

        assert!(text.contains("Player: Travis Kelce (TE)"));
        assert!(text.contains("Game: Buffalo Bills @ Kansas City Chiefs [Week 7]"));
        assert!(text.contains("Total Points: 17.76"));
        assert!(text.contains("  Receiving: 17.76"));
        assert!(!text.contains("Passing:"));
        assert!(text.contains("  Receptions: 5.50\n"));
        assert!(text.contains("  Receiving TDs: 0.53 (est.)"));
    }
}
