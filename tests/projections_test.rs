//! End-to-end tests: raw Odds API payloads to ranked projections

use serde_json::json;
use vegas_ffl::{
    odds::{group_player_props, EventOdds},
    projections::{assemble_projections, count_players, NflCalendar, ScoringConfig, Stat},
    GameWeek, Position,
};

const EPSILON: f64 = 1e-9;

fn event_odds() -> Vec<EventOdds> {
    let bills_chiefs = json!({
        "id": "evt-1",
        "home_team": "Kansas City Chiefs",
        "away_team": "Buffalo Bills",
        "commence_time": "2025-10-19T20:25:00Z",
        "bookmakers": [
            {
                "key": "draftkings",
                "title": "DraftKings",
                "markets": [
                    { "key": "player_pass_yds", "outcomes": [
                        { "name": "Over", "description": "Josh Allen", "price": 1.87, "point": 240.5 },
                        { "name": "Under", "description": "Josh Allen", "price": 1.93, "point": 240.5 }
                    ]},
                    { "key": "player_pass_tds", "outcomes": [
                        { "name": "Over", "description": "Josh Allen", "price": 2.1, "point": 1.5 }
                    ]},
                    { "key": "player_rush_yds", "outcomes": [
                        { "name": "Over", "description": "Josh Allen", "price": 1.9, "point": 35.5 },
                        { "name": "Over", "description": "James Cook", "price": 1.9, "point": 64.5 }
                    ]},
                    { "key": "player_receptions", "outcomes": [
                        { "name": "Over", "description": "Travis Kelce", "price": 1.8, "point": 5.5 },
                        { "name": "Over", "description": "James Cook", "price": 1.8, "point": 2.5 }
                    ]},
                    { "key": "player_reception_yds", "outcomes": [
                        { "name": "Over", "description": "Travis Kelce", "price": 1.9, "point": 52.5 },
                        { "name": "Over", "description": "James Cook", "price": 1.9, "point": 18.5 }
                    ]},
                    { "key": "player_anytime_td", "outcomes": [
                        { "name": "Yes", "description": "James Cook", "price": 2.2 }
                    ]}
                ]
            },
            {
                "key": "fanduel",
                "title": "FanDuel",
                "markets": [
                    { "key": "player_pass_yds", "outcomes": [
                        { "name": "Over", "description": "Josh Allen", "price": 1.9, "point": 250.5 }
                    ]},
                    { "key": "player_reception_yds", "outcomes": [
                        { "name": "Over", "description": "Travis Kelce", "price": 1.9, "point": "n/a" }
                    ]}
                ]
            }
        ]
    });

    let empty_game = json!({
        "id": "evt-2",
        "home_team": "Denver Broncos",
        "away_team": "New York Giants",
        "commence_time": "2025-10-19T20:05:00Z",
        "bookmakers": []
    });

    vec![
        serde_json::from_value(bills_chiefs).unwrap(),
        serde_json::from_value(empty_game).unwrap(),
    ]
}

#[test]
fn test_full_pipeline_from_odds_payload() {
    let config = ScoringConfig::default();
    let formats = config.select(None).unwrap();
    let players = group_player_props(&event_odds());
    assert_eq!(players.len(), 3);

    let projections = assemble_projections(
        &players,
        &formats,
        &config.estimation,
        &NflCalendar::default(),
    );

    assert_eq!(projections.len(), 9);
    assert_eq!(count_players(&projections), 3);

    // Ranked highest first.
    for pair in projections.windows(2) {
        assert!(pair[0].total_points >= pair[1].total_points);
    }

    let allen = projections
        .iter()
        .find(|p| p.player == "Josh Allen" && p.format == "STANDARD")
        .unwrap();
    assert_eq!(allen.position, Position::QB);
    assert_eq!(allen.week, GameWeek::Week(7));
    assert_eq!(allen.stats.get(Stat::PassYards), 245.5);
    assert_eq!(allen.stats.get(Stat::PassTds), 1.5);
    assert!(allen.stats.is_estimated(Stat::RushTds));
    let expected_passing = 245.5 * 0.04 + 1.5 * 4.0;
    let expected_rushing = 35.5 * 0.1 + (35.5 / 90.0) * 6.0;
    assert!((allen.breakdown.passing - expected_passing).abs() < EPSILON);
    assert!((allen.breakdown.rushing - expected_rushing).abs() < EPSILON);

    // The FanDuel string line is rejected; DraftKings alone sets the consensus.
    let kelce = projections
        .iter()
        .find(|p| p.player == "Travis Kelce" && p.format == "PPR")
        .unwrap();
    assert_eq!(kelce.stats.get(Stat::RecYards), 52.5);
    assert_eq!(kelce.position, Position::TE);

    let cook = projections
        .iter()
        .find(|p| p.player == "James Cook" && p.format == "HALF_PPR")
        .unwrap();
    assert_eq!(cook.position, Position::RB);
    assert!((cook.stats.get(Stat::Fumbles) - 2.5 / 200.0).abs() < EPSILON);
}

#[test]
fn test_breakdown_sums_to_total_for_every_projection() {
    let config = ScoringConfig::default();
    let formats = config.select(None).unwrap();
    let projections = assemble_projections(
        &group_player_props(&event_odds()),
        &formats,
        &config.estimation,
        &NflCalendar::default(),
    );

    for p in &projections {
        assert!(
            (p.breakdown.total() - p.total_points).abs() < EPSILON,
            "{} {}: breakdown {} != total {}",
            p.player,
            p.format,
            p.breakdown.total(),
            p.total_points
        );
    }
}

#[test]
fn test_reception_bonus_is_the_only_format_difference() {
    let config = ScoringConfig::default();
    let formats = config.select(None).unwrap();
    let projections = assemble_projections(
        &group_player_props(&event_odds()),
        &formats,
        &config.estimation,
        &NflCalendar::default(),
    );

    let points = |format: &str| {
        projections
            .iter()
            .find(|p| p.player == "Travis Kelce" && p.format == format)
            .unwrap()
            .total_points
    };
    assert!((points("PPR") - points("STANDARD") - 5.5).abs() < EPSILON);
    assert!((points("HALF_PPR") - points("STANDARD") - 2.75).abs() < EPSILON);
}

#[test]
fn test_single_format_selection() {
    let config = ScoringConfig::default();
    let formats = config.select(Some("half_ppr")).unwrap();
    let projections = assemble_projections(
        &group_player_props(&event_odds()),
        &formats,
        &config.estimation,
        &NflCalendar::default(),
    );

    assert_eq!(projections.len(), 3);
    assert!(projections.iter().all(|p| p.format == "HALF_PPR"));
}
