use std::collections::HashMap;
use tracing::{info, warn};

use super::error::PREDICTION_FAILED;
use crate::service::{
    FactorValue, Outcome, PredictionRequest, PredictionResult, PredictionService, FALLBACK_MODEL,
};

// The only pairing with an offline answer.  Do not widen this to other teams.
const FALLBACK_HOME: &str = "Liverpool";
const FALLBACK_AWAY: &str = "Southampton";

/// Synthetic result served for Liverpool vs Southampton when the service is down.
pub fn fallback_prediction(home: &str, away: &str) -> Option<PredictionResult> {
    if home != FALLBACK_HOME || away != FALLBACK_AWAY {
        return None;
    }
    let mut key_factors = HashMap::new();
    key_factors.insert(
        "note".to_string(),
        FactorValue::Text(
            "Using fallback Liverpool vs Southampton prediction (API unavailable)".to_string(),
        ),
    );
    Some(PredictionResult {
        home_team: home.to_string(),
        away_team: away.to_string(),
        home_win_probability: 0.75,
        draw_probability: 0.15,
        away_win_probability: 0.10,
        outcome: Outcome::Home,
        model_used: FALLBACK_MODEL.to_string(),
        key_factors,
    })
}

/// Final result/error pair of one submission, applied to the state in one step.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub result: Option<PredictionResult>,
    pub error: Option<String>,
}

/// Call the service for a validated pair and interpret the answer.
pub async fn request_prediction(
    service: &dyn PredictionService,
    home: &str,
    away: &str,
) -> Completion {
    let request = PredictionRequest {
        home_team: home.to_string(),
        away_team: away.to_string(),
    };

    match service.predict(&request).await {
        Ok(result) => {
            info!(
                "Prediction {} vs {}: H={:.2} D={:.2} A={:.2} ({:?}, model={})",
                result.home_team,
                result.away_team,
                result.home_win_probability,
                result.draw_probability,
                result.away_win_probability,
                result.outcome,
                result.model_used
            );
            Completion {
                result: Some(result),
                error: None,
            }
        }
        Err(e) => {
            warn!(
                "Prediction for '{} vs {}' via {} failed: {:#}",
                home,
                away,
                service.name(),
                e
            );
            let result = fallback_prediction(home, away);
            if result.is_some() {
                info!("Serving fallback prediction for {} vs {}", home, away);
            }
            Completion {
                result,
                error: Some(PREDICTION_FAILED.to_string()),
            }
        }
    }
}
