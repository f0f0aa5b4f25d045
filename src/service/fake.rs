//! Scripted in-memory `PredictionService` for workflow tests.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

use super::models::{Outcome, PredictionRequest, PredictionResult};
use super::provider::PredictionService;

#[derive(Default)]
pub struct FakeService {
    /// `None` makes `fetch_teams` fail.
    pub teams: Option<Vec<String>>,
    /// When false every `predict` call fails.
    pub predict_ok: bool,
    /// When set, `predict` waits for a notification before answering.
    pub gate: Option<Arc<Notify>>,
    pub team_calls: AtomicUsize,
    pub predict_calls: AtomicUsize,
}

impl FakeService {
    pub fn online(teams: &[&str]) -> Self {
        FakeService {
            teams: Some(teams.iter().map(|t| t.to_string()).collect()),
            predict_ok: true,
            ..Default::default()
        }
    }

    pub fn offline() -> Self {
        FakeService::default()
    }

    pub fn team_calls(&self) -> usize {
        self.team_calls.load(Ordering::SeqCst)
    }

    pub fn predict_calls(&self) -> usize {
        self.predict_calls.load(Ordering::SeqCst)
    }
}

pub fn sample_result(home: &str, away: &str) -> PredictionResult {
    PredictionResult {
        home_team: home.to_string(),
        away_team: away.to_string(),
        home_win_probability: 0.45,
        draw_probability: 0.30,
        away_win_probability: 0.25,
        outcome: Outcome::Home,
        model_used: "random-forest".to_string(),
        key_factors: HashMap::new(),
    }
}

#[async_trait]
impl PredictionService for FakeService {
    fn name(&self) -> &str {
        "Fake"
    }

    async fn fetch_teams(&self) -> Result<Vec<String>> {
        self.team_calls.fetch_add(1, Ordering::SeqCst);
        self.teams
            .clone()
            .ok_or_else(|| anyhow::anyhow!("connection refused"))
    }

    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult> {
        self.predict_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if !self.predict_ok {
            anyhow::bail!("connection refused");
        }
        Ok(sample_result(&request.home_team, &request.away_team))
    }
}
