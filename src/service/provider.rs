use anyhow::Result;
use async_trait::async_trait;

use super::models::{PredictionRequest, PredictionResult};

/// Remote scoring service the workflow talks to.
#[async_trait]
pub trait PredictionService: Send + Sync {
    /// Ordered list of selectable team names.
    async fn fetch_teams(&self) -> Result<Vec<String>>;

    /// Score a single home/away pairing.
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}
