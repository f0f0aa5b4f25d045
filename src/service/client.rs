use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use super::models::{PredictionRequest, PredictionResult};
use super::provider::PredictionService;

/// reqwest-backed client for the prediction service (`/teams`, `/predict`).
#[derive(Clone)]
pub struct PredictionApiClient {
    http: Client,
    base_url: String,
}

impl PredictionApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(PredictionApiClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl PredictionService for PredictionApiClient {
    fn name(&self) -> &str {
        "PredictionAPI"
    }

    async fn fetch_teams(&self) -> Result<Vec<String>> {
        let url = self.endpoint("teams");
        debug!("Fetching team list from {}", url);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .context("Team list request failed")?;

        if !resp.status().is_success() {
            anyhow::bail!("Team list error: {}", resp.status());
        }

        let raw: serde_json::Value = resp
            .json()
            .await
            .context("Failed to parse team list response")?;

        let teams = parse_team_list(&raw)?;
        info!("Loaded {} teams from {}", teams.len(), self.base_url);
        Ok(teams)
    }

    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult> {
        let url = self.endpoint("predict");
        debug!(
            "Requesting prediction for '{} vs {}' from {}",
            request.home_team, request.away_team, url
        );

        let resp = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .context("Prediction request failed")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("Prediction API error {}: {}", status, body);
        }

        let raw: serde_json::Value = resp
            .json()
            .await
            .context("Failed to parse prediction response")?;

        parse_prediction(raw)
    }
}

// ── Parsing helpers ────────────────────────────────────────────────────────────

fn parse_team_list(raw: &serde_json::Value) -> Result<Vec<String>> {
    let items = raw
        .as_array()
        .context("Team list response is not a JSON array")?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .with_context(|| format!("Team list entry is not a string: {}", item))
        })
        .collect()
}

fn parse_prediction(raw: serde_json::Value) -> Result<PredictionResult> {
    let prediction: PredictionResult =
        serde_json::from_value(raw).context("Prediction response has an unexpected shape")?;

    for (label, p) in [
        ("home_win_probability", prediction.home_win_probability),
        ("draw_probability", prediction.draw_probability),
        ("away_win_probability", prediction.away_win_probability),
    ] {
        if !(0.0..=1.0).contains(&p) {
            anyhow::bail!("{} out of range: {}", label, p);
        }
    }

    Ok(prediction)
}
