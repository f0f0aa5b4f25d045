use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Body of `POST /predict`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub home_team: String,
    pub away_team: String,
}

/// Predicted match result.  On the wire this is the `prediction` field
/// carrying `"H"`, `"D"` or `"A"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Outcome {
    #[serde(rename = "H")]
    Home,
    #[default]
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "A")]
    Away,
}

impl Outcome {
    /// Unknown or missing tags count as a draw.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("H") => Outcome::Home,
            Some("A") => Outcome::Away,
            _ => Outcome::Draw,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Outcome::Home => "H",
            Outcome::Draw => "D",
            Outcome::Away => "A",
        }
    }
}

fn deserialize_outcome<'de, D>(deserializer: D) -> Result<Outcome, D::Error>
where
    D: Deserializer<'de>,
{
    let tag = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(Outcome::from_tag(tag.as_ref().and_then(|v| v.as_str())))
}

fn deserialize_key_factors<'de, D>(
    deserializer: D,
) -> Result<HashMap<String, FactorValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let factors = Option::<HashMap<String, FactorValue>>::deserialize(deserializer)?;
    Ok(factors.unwrap_or_default())
}

/// A key-factor explanation: usually text or a number, anything else is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FactorValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl std::fmt::Display for FactorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactorValue::Number(n) => write!(f, "{}", n),
            FactorValue::Text(s) => f.write_str(s),
            FactorValue::Other(v) => write!(f, "{}", v),
        }
    }
}

/// Model name attached to the synthetic Liverpool–Southampton result.
pub const FALLBACK_MODEL: &str = "Fallback Model";

/// Response of `POST /predict`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub home_team: String,
    pub away_team: String,
    /// Probability of a home win (0.0–1.0)
    pub home_win_probability: f64,
    /// Probability of a draw (0.0–1.0)
    pub draw_probability: f64,
    /// Probability of an away win (0.0–1.0)
    pub away_win_probability: f64,
    #[serde(
        rename = "prediction",
        default,
        deserialize_with = "deserialize_outcome"
    )]
    pub outcome: Outcome,
    #[serde(default)]
    pub model_used: String,
    #[serde(default, deserialize_with = "deserialize_key_factors")]
    pub key_factors: HashMap<String, FactorValue>,
}

impl PredictionResult {
    /// True when this result was synthesised locally instead of coming from the service.
    pub fn is_fallback(&self) -> bool {
        self.model_used == FALLBACK_MODEL
    }

    /// The three probabilities in home/draw/away order.
    pub fn probabilities(&self) -> [f64; 3] {
        [
            self.home_win_probability,
            self.draw_probability,
            self.away_win_probability,
        ]
    }
}
