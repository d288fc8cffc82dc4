use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Deserialize a list, keeping only the elements that decode as `T`.
///
/// A wrong-shaped element (or a non-array value) drops that data rather than
/// failing the whole response.
fn de_lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(deserializer)?;
    let Value::Array(items) = raw else {
        if !raw.is_null() {
            log::debug!("expected a list, got {}", raw);
        }
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<T>(item) {
            Ok(v) => Some(v),
            Err(e) => {
                log::debug!("skipping malformed element: {}", e);
                None
            }
        })
        .collect())
}

/// An upcoming game from `GET /sports/{sport}/events`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Event {
    pub id: String,
    #[serde(default)]
    pub sport_key: Option<String>,
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub away_team: Option<String>,
    #[serde(default)]
    pub commence_time: Option<String>,
}

/// Odds for one event from `GET /sports/{sport}/events/{id}/odds`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EventOdds {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub away_team: Option<String>,
    #[serde(default)]
    pub commence_time: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_vec")]
    pub bookmakers: Vec<Bookmaker>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Bookmaker {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_vec")]
    pub markets: Vec<Market>,
}

impl Bookmaker {
    /// Display name, falling back to the key.
    pub fn name(&self) -> Option<&str> {
        self.title.as_deref().or(self.key.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Market {
    pub key: String,
    #[serde(default, deserialize_with = "de_lenient_vec")]
    pub outcomes: Vec<Outcome>,
}

/// One side of a player prop. `description` holds the player name and
/// `point` the line; both are kept loose and validated during parsing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Outcome {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub point: Option<Value>,
}
