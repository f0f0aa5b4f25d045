use serde::Serialize;
use std::collections::HashSet;

use crate::service::PredictionResult;

/// Where the current catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    #[default]
    Empty,
    Remote,
    Default,
}

/// Ordered, duplicate-free list of selectable team names.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Catalog {
    teams: Vec<String>,
    source: CatalogSource,
}

impl Catalog {
    /// Build a catalog keeping the first occurrence of each name.
    pub fn new(teams: Vec<String>, source: CatalogSource) -> Self {
        let mut seen = HashSet::new();
        let teams = teams
            .into_iter()
            .filter(|t| seen.insert(t.clone()))
            .collect();
        Catalog { teams, source }
    }

    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    pub fn source(&self) -> CatalogSource {
        self.source
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn contains(&self, team: &str) -> bool {
        self.teams.iter().any(|t| t == team)
    }

    /// A catalog needs two teams before anything can be submitted.
    pub fn is_usable(&self) -> bool {
        self.teams.len() >= 2
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Selection {
    pub home: Option<String>,
    pub away: Option<String>,
}

impl Selection {
    /// Seed home/away with the first two catalog entries, or clear both.
    pub fn seeded_from(catalog: &Catalog) -> Self {
        match catalog.teams() {
            [home, away, ..] => Selection {
                home: Some(home.clone()),
                away: Some(away.clone()),
            },
            _ => Selection::default(),
        }
    }

    pub fn pair(&self) -> Option<(&str, &str)> {
        Some((self.home.as_deref()?, self.away.as_deref()?))
    }
}

/// Everything the front-end renders from.  Only the controller mutates it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WorkflowState {
    pub catalog: Catalog,
    pub selection: Selection,
    pub result: Option<PredictionResult>,
    pub loading: bool,
    pub error: Option<String>,
}
