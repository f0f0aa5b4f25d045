pub mod client;
pub mod models;
pub mod provider;

#[cfg(test)]
pub mod fake;

pub use client::PredictionApiClient;
pub use models::{FactorValue, Outcome, PredictionRequest, PredictionResult, FALLBACK_MODEL};
pub use provider::PredictionService;
