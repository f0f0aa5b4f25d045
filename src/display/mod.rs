//! Plain-text rendering of the workflow state.

use std::fmt::Write as _;

use crate::service::{Outcome, PredictionResult};
use crate::workflow::WorkflowState;

/// Visual weight of a single probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// High at 0.6 and above, Medium from 0.3, Low below.
    pub fn from_probability(p: f64) -> Self {
        if p >= 0.6 {
            Severity::High
        } else if p >= 0.3 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }
}

/// Human label for a raw outcome tag: the winning team's name, or "Draw".
pub fn outcome_label<'a>(tag: Option<&str>, home: &'a str, away: &'a str) -> &'a str {
    match Outcome::from_tag(tag) {
        Outcome::Home => home,
        Outcome::Away => away,
        Outcome::Draw => "Draw",
    }
}

fn probability_line(out: &mut String, label: &str, p: f64) {
    let _ = writeln!(
        out,
        "  {:<9} {:>5.1}%  [{}]",
        label,
        p * 100.0,
        Severity::from_probability(p).label()
    );
}

/// Render a prediction card.
pub fn render_prediction(result: &PredictionResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Prediction Result");
    let _ = writeln!(out, "{} vs {}", result.home_team, result.away_team);
    for (label, p) in ["Home Win", "Draw", "Away Win"]
        .into_iter()
        .zip(result.probabilities())
    {
        probability_line(&mut out, label, p);
    }
    let outcome = outcome_label(
        Some(result.outcome.tag()),
        &result.home_team,
        &result.away_team,
    );
    let _ = writeln!(out, "Outcome: {}", outcome);
    if !result.model_used.is_empty() {
        let _ = writeln!(out, "Model: {}", result.model_used);
    }

    if !result.key_factors.is_empty() {
        let _ = writeln!(out, "Key factors:");
        let mut factors: Vec<_> = result.key_factors.iter().collect();
        factors.sort_by(|a, b| a.0.cmp(b.0));
        for (key, value) in factors {
            let _ = writeln!(out, "  - {}: {}", key.replace('_', " "), value);
        }
    }
    out
}

/// Render everything the user should see for the current state.
pub fn render_state(state: &WorkflowState) -> String {
    let mut out = String::new();
    if state.loading {
        let _ = writeln!(out, "Predicting...");
    }
    if let Some(err) = &state.error {
        let _ = writeln!(out, "! {}", err);
    }
    if let Some(result) = &state.result {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&render_prediction(result));
    }
    out
}

/// One team per line, with the current selection marked.
pub fn render_catalog(state: &WorkflowState) -> String {
    let mut out = String::new();
    for team in state.catalog.teams() {
        let marker = if state.selection.home.as_deref() == Some(team.as_str()) {
            " (home)"
        } else if state.selection.away.as_deref() == Some(team.as_str()) {
            " (away)"
        } else {
            ""
        };
        let _ = writeln!(out, "{}{}", team, marker);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::FactorValue;
    use crate::workflow::requester::fallback_prediction;
    use crate::workflow::{default_catalog, Selection};

    #[test]
    fn test_outcome_label_all_tags() {
        assert_eq!(outcome_label(Some("H"), "Arsenal", "Chelsea"), "Arsenal");
        assert_eq!(outcome_label(Some("A"), "Arsenal", "Chelsea"), "Chelsea");
        assert_eq!(outcome_label(Some("D"), "Arsenal", "Chelsea"), "Draw");
        assert_eq!(outcome_label(Some("Z"), "Arsenal", "Chelsea"), "Draw");
        assert_eq!(outcome_label(None, "Arsenal", "Chelsea"), "Draw");
    }

    #[test]
    fn test_severity_bands() {
        assert_eq!(Severity::from_probability(0.75), Severity::High);
        assert_eq!(Severity::from_probability(0.45), Severity::Medium);
        assert_eq!(Severity::from_probability(0.1), Severity::Low);
        assert_eq!(Severity::from_probability(0.6), Severity::High);
        assert_eq!(Severity::from_probability(0.3), Severity::Medium);
        assert_eq!(Severity::from_probability(0.0), Severity::Low);
        assert_eq!(Severity::from_probability(1.0), Severity::High);
    }

    #[test]
    fn test_each_probability_banded_independently() {
        let p = fallback_prediction("Liverpool", "Southampton").unwrap();
        let bands: Vec<_> = p
            .probabilities()
            .iter()
            .map(|&x| Severity::from_probability(x))
            .collect();
        assert_eq!(bands, vec![Severity::High, Severity::Low, Severity::Low]);
    }

    #[test]
    fn test_render_prediction_card() {
        let mut p = fallback_prediction("Liverpool", "Southampton").unwrap();
        p.key_factors
            .insert("home_form".into(), FactorValue::Number(2.5));
        let card = render_prediction(&p);
        assert!(card.contains("Liverpool vs Southampton"));
        assert!(card.contains("75.0%  [HIGH]"));
        assert!(card.contains("15.0%  [LOW]"));
        assert!(card.contains("Outcome: Liverpool"));
        assert!(card.contains("Model: Fallback Model"));
        assert!(card.contains("  - home form: 2.5"));
    }

    #[test]
    fn test_render_state_shows_error_and_loading() {
        let state = WorkflowState {
            loading: true,
            error: Some("Prediction failed".into()),
            ..Default::default()
        };
        let text = render_state(&state);
        assert!(text.contains("Predicting..."));
        assert!(text.contains("! Prediction failed"));
        assert!(!text.contains("Prediction Result"));
    }

    #[test]
    fn test_render_catalog_marks_selection() {
        let catalog = default_catalog();
        let state = WorkflowState {
            selection: Selection::seeded_from(&catalog),
            catalog,
            ..Default::default()
        };
        let text = render_catalog(&state);
        assert_eq!(text.lines().count(), 20);
        assert!(text.starts_with("Manchester City (home)\nLiverpool (away)\nArsenal\n"));
    }
}
