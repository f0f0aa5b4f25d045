pub mod catalog;
pub mod error;
pub mod requester;
pub mod state;
pub mod validator;

pub use catalog::{default_catalog, load_teams, DEFAULT_TEAMS};
pub use error::{ValidationError, WorkflowError};
pub use state::{Catalog, CatalogSource, Selection, WorkflowState};

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

use crate::service::{PredictionResult, PredictionService};

/// Prediction workflow controller.
///
/// Owns the single [`WorkflowState`] and is the only thing that mutates it.
/// Every transition happens inside one write-lock section, so a reader never
/// observes a half-applied update (e.g. `loading == false` next to a stale
/// result).  The lock is released while the remote call is in flight.
#[derive(Clone)]
pub struct PredictionWorkflow {
    service: Arc<dyn PredictionService>,
    state: Arc<RwLock<WorkflowState>>,
}

impl PredictionWorkflow {
    pub fn new(service: Arc<dyn PredictionService>) -> Self {
        PredictionWorkflow {
            service,
            state: Arc::new(RwLock::new(WorkflowState::default())),
        }
    }

    /// Copy of the current state for rendering.
    pub async fn snapshot(&self) -> WorkflowState {
        self.state.read().await.clone()
    }

    /// Load the team catalog (live or default) and re-seed the selection.
    pub async fn load_teams(&self) -> Catalog {
        let load = load_teams(self.service.as_ref()).await;

        let mut state = self.state.write().await;
        state.selection = Selection::seeded_from(&load.catalog);
        state.catalog = load.catalog.clone();
        state.error = load.advisory.map(str::to_string);
        load.catalog
    }

    pub async fn select_home(&self, team: &str) -> Result<(), WorkflowError> {
        let mut state = self.state.write().await;
        if !state.catalog.contains(team) {
            return Err(WorkflowError::UnknownTeam(team.to_string()));
        }
        state.selection.home = Some(team.to_string());
        Ok(())
    }

    pub async fn select_away(&self, team: &str) -> Result<(), WorkflowError> {
        let mut state = self.state.write().await;
        if !state.catalog.contains(team) {
            return Err(WorkflowError::UnknownTeam(team.to_string()));
        }
        state.selection.away = Some(team.to_string());
        Ok(())
    }

    /// Whether a submit button would be enabled right now.
    pub async fn can_submit(&self) -> bool {
        let state = self.state.read().await;
        !state.loading
            && state
                .selection
                .pair()
                .is_some_and(|(home, away)| validator::validate(home, away).is_ok())
    }

    /// Predict the currently selected pairing.
    pub async fn submit(&self) -> Result<PredictionResult, WorkflowError> {
        let (home, away) = {
            let state = self.state.read().await;
            let (home, away) = state
                .selection
                .pair()
                .ok_or(WorkflowError::SelectionIncomplete)?;
            (home.to_string(), away.to_string())
        };
        self.predict(&home, &away).await
    }

    /// Validate, call the service, and publish the outcome.
    ///
    /// The remote call is detached from the returned future: dropping it
    /// (e.g. under `tokio::time::timeout`) leaves the request running, and its
    /// completion still lands in the state and clears `loading`.
    ///
    /// Returns the result that ends up in the state.  For the one pairing
    /// with an offline fallback that is `Ok` even though the call failed; the
    /// state's error still reads "Prediction failed" in that case.
    pub async fn predict(&self, home: &str, away: &str) -> Result<PredictionResult, WorkflowError> {
        {
            let mut state = self.state.write().await;
            if state.loading {
                warn!("Rejected prediction for {} vs {}: request in flight", home, away);
                return Err(WorkflowError::InFlight);
            }
            if let Err(e) = validator::validate(home, away) {
                state.error = Some(e.to_string());
                return Err(e.into());
            }
            state.error = None;
            state.loading = true;
        }

        debug!("Submitting prediction for {} vs {}", home, away);

        // The request runs on its own task so that `loading` is always
        // cleared, even if the caller stops awaiting this future.
        let service = Arc::clone(&self.service);
        let shared = Arc::clone(&self.state);
        let (home, away) = (home.to_string(), away.to_string());
        let task = tokio::spawn(async move {
            let done = requester::request_prediction(service.as_ref(), &home, &away).await;

            let mut state = shared.write().await;
            state.result = done.result.clone();
            state.error = done.error;
            state.loading = false;
            done.result
        });

        match task.await {
            Ok(result) => result.ok_or(WorkflowError::PredictionFailed),
            Err(e) => {
                error!("Prediction task did not complete: {}", e);
                let mut state = self.state.write().await;
                state.result = None;
                state.error = Some(error::PREDICTION_FAILED.to_string());
                state.loading = false;
                Err(WorkflowError::PredictionFailed)
            }
        }
    }
}
