//! Team catalog acquisition.
//!
//! The live list comes from the prediction service.  Any failure there is an
//! advisory degrade: the built-in Premier League list is used instead and the
//! workflow stays fully usable offline.  There is no retry.

use tracing::{info, warn};

use super::error::TEAMS_UNAVAILABLE;
use super::state::{Catalog, CatalogSource};
use crate::service::PredictionService;

/// Built-in catalog used when the live team list cannot be loaded.
pub const DEFAULT_TEAMS: [&str; 20] = [
    "Manchester City",
    "Liverpool",
    "Arsenal",
    "Manchester United",
    "Chelsea",
    "Tottenham",
    "Newcastle United",
    "Aston Villa",
    "Brighton & Hove Albion",
    "West Ham United",
    "Crystal Palace",
    "Wolverhampton",
    "Everton",
    "Leicester City",
    "Brentford",
    "Fulham",
    "Bournemouth",
    "Nottingham Forest",
    "Leeds United",
    "Southampton",
];

pub fn default_catalog() -> Catalog {
    Catalog::new(
        DEFAULT_TEAMS.iter().map(|t| t.to_string()).collect(),
        CatalogSource::Default,
    )
}

/// Result of a catalog load.  `advisory` is set when the default list was substituted.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    pub advisory: Option<&'static str>,
}

/// Fetch the live team list, falling back to [`DEFAULT_TEAMS`] on any failure.
pub async fn load_teams(service: &dyn PredictionService) -> CatalogLoad {
    match service.fetch_teams().await {
        Ok(teams) => {
            let catalog = Catalog::new(teams, CatalogSource::Remote);
            if !catalog.is_usable() {
                warn!(
                    "{} returned only {} team(s); selection stays unset",
                    service.name(),
                    catalog.len()
                );
            } else {
                info!("Team catalog loaded from {} ({} teams)", service.name(), catalog.len());
            }
            CatalogLoad {
                catalog,
                advisory: None,
            }
        }
        Err(e) => {
            warn!(
                "Team list from {} unavailable, using default list: {:#}",
                service.name(),
                e
            );
            CatalogLoad {
                catalog: default_catalog(),
                advisory: Some(TEAMS_UNAVAILABLE),
            }
        }
    }
}
