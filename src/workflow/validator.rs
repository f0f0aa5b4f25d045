use super::error::ValidationError;

/// Gate run before every submission: home and away must be different teams.
pub fn validate(home: &str, away: &str) -> Result<(), ValidationError> {
    if home == away {
        return Err(ValidationError::SameTeam);
    }
    Ok(())
}
