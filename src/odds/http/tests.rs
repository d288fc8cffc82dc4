//! Unit tests for the Odds API client

use super::*;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn sample_odds(event_id: &str, player: &str, point: f64) -> Value {
    json!({
        "id": event_id,
        "home_team": "Kansas City Chiefs",
        "away_team": "Buffalo Bills",
        "commence_time": "2025-10-19T20:25:00Z",
        "bookmakers": [{
            "key": "draftkings",
            "title": "DraftKings",
            "markets": [{
                "key": "player_pass_yds",
                "outcomes": [
                    { "name": "Over", "description": player, "price": 1.87, "point": point },
                    { "name": "Under", "description": player, "price": 1.93, "point": point }
                ]
            }]
        }]
    })
}

#[cfg(test)]
mod http_tests {
    use super::*;

    #[test]
    fn test_odds_api_base_url_constant() {
        assert_eq!(ODDS_API_BASE_URL, "https://api.the-odds-api.com/v4");
    }

    #[test]
    fn test_default_request_markets() {
        let request = PropsRequest::default();
        assert_eq!(request.sport, "americanfootball_nfl");
        assert_eq!(request.regions, "us");
        assert_eq!(
            request.markets_param(),
            "player_pass_yds,player_pass_tds,player_rush_yds,player_receptions,player_reception_yds"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = OddsClient::with_base_url("key", "http://localhost:9999/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:9999");
    }

    #[tokio::test]
    async fn test_get_events_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sports/americanfootball_nfl/events"))
            .and(query_param("apiKey", "test-key"))
            .and(query_param("regions", "us"))
            .and(header("accept", "application/json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("x-requests-remaining", "499")
                    .set_body_json(json!([
                        { "id": "evt-1", "home_team": "Kansas City Chiefs", "away_team": "Buffalo Bills" },
                        { "home_team": "No Id Team" },
                        { "id": "evt-2" }
                    ])),
            )
            .mount(&mock_server)
            .await;

        let client = OddsClient::with_base_url("test-key", mock_server.uri()).unwrap();
        let events = client.get_events(&PropsRequest::default()).await.unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, "evt-1");
        assert_eq!(events[1].id, "evt-2");
    }

    #[tokio::test]
    async fn test_get_event_odds_sends_markets() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sports/americanfootball_nfl/events/evt-1/odds"))
            .and(query_param("apiKey", "test-key"))
            .and(query_param("oddsFormat", "decimal"))
            .and(query_param("markets", "player_pass_yds,player_pass_tds"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(sample_odds("evt-1", "Josh Allen", 245.5)),
            )
            .mount(&mock_server)
            .await;

        let client = OddsClient::with_base_url("test-key", mock_server.uri()).unwrap();
        let request = PropsRequest {
            markets: vec![PropMarket::PassYards, PropMarket::PassTds],
            ..PropsRequest::default()
        };
        let odds = client.get_event_odds(&request, "evt-1").await.unwrap();

        assert_eq!(odds.id.as_deref(), Some("evt-1"));
        assert_eq!(odds.bookmakers.len(), 1);
        assert_eq!(odds.bookmakers[0].markets[0].outcomes.len(), 2);
    }

    #[tokio::test]
    async fn test_unauthorized_is_http_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sports/americanfootball_nfl/events"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "message": "API key is not valid"
            })))
            .mount(&mock_server)
            .await;

        let client = OddsClient::with_base_url("bad-key", mock_server.uri()).unwrap();
        match client.get_events(&PropsRequest::default()).await {
            Err(VegasError::Http(e)) => assert_eq!(e.status().map(|s| s.as_u16()), Some(401)),
            other => panic!("Expected Http error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_events_response_must_be_a_list() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sports/americanfootball_nfl/events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "events": [] })))
            .mount(&mock_server)
            .await;

        let client = OddsClient::with_base_url("test-key", mock_server.uri()).unwrap();
        match client.get_events(&PropsRequest::default()).await {
            Err(VegasError::NoData { context }) => assert!(context.contains("not a list")),
            other => panic!("Expected NoData error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_event_odds_skips_malformed_event() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sports/americanfootball_nfl/events"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{ "id": "good" }, { "id": "bad" }])),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/sports/americanfootball_nfl/events/good/odds"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(sample_odds("good", "Josh Allen", 245.5)),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/sports/americanfootball_nfl/events/bad/odds"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!("not an event")))
            .mount(&mock_server)
            .await;

        let client = OddsClient::with_base_url("test-key", mock_server.uri()).unwrap();
        let odds = fetch_event_odds(&client, &PropsRequest::default(), false)
            .await
            .unwrap();

        assert_eq!(odds.len(), 1);
        assert_eq!(odds[0].id.as_deref(), Some("good"));
    }

    #[tokio::test]
    async fn test_fetch_event_odds_skips_non_json_event() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sports/americanfootball_nfl/events"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{ "id": "good" }, { "id": "bad" }])),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/sports/americanfootball_nfl/events/good/odds"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(sample_odds("good", "Josh Allen", 245.5)),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/sports/americanfootball_nfl/events/bad/odds"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html")
                    .set_body_string("<html>upstream hiccup</html>"),
            )
            .mount(&mock_server)
            .await;

        let client = OddsClient::with_base_url("test-key", mock_server.uri()).unwrap();
        let odds = fetch_event_odds(&client, &PropsRequest::default(), false)
            .await
            .unwrap();

        assert_eq!(odds.len(), 1);
        assert_eq!(odds[0].id.as_deref(), Some("good"));
    }

    #[tokio::test]
    async fn test_get_event_odds_truncated_body_is_json_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sports/americanfootball_nfl/events/evt-1/odds"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id": "evt-1", "bookm"#))
            .mount(&mock_server)
            .await;

        let client = OddsClient::with_base_url("test-key", mock_server.uri()).unwrap();
        match client.get_event_odds(&PropsRequest::default(), "evt-1").await {
            Err(VegasError::Json(_)) => {}
            other => panic!("Expected Json error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_event_odds_with_no_events_is_no_data() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sports/americanfootball_nfl/events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&mock_server)
            .await;

        let client = OddsClient::with_base_url("test-key", mock_server.uri()).unwrap();
        match fetch_event_odds(&client, &PropsRequest::default(), false).await {
            Err(VegasError::NoData { context }) => assert!(context.contains("americanfootball_nfl")),
            other => panic!("Expected NoData error, got {:?}", other),
        }
    }
}
