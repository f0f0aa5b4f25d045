use thiserror::Error;

/// User-facing message for a failed prediction call.
pub const PREDICTION_FAILED: &str = "Prediction failed";

/// Advisory shown when the live team list could not be loaded.
pub const TEAMS_UNAVAILABLE: &str = "Cannot load teams from API. Using default list.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Teams must differ")]
    SameTeam,
}

/// Reasons a workflow operation was refused or did not produce a result.
/// The `Display` text is what the front-end shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Select both a home and an away team")]
    SelectionIncomplete,

    #[error("A prediction is already in progress")]
    InFlight,

    #[error("Unknown team: {0}")]
    UnknownTeam(String),

    #[error("Prediction failed")]
    PredictionFailed,
}
