//! Wire types for the leaderboard endpoints.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::dto::validation::validate_player_name;

/// Request body for `POST /update-score`.
///
/// Both fields are optional on the wire so that a missing one yields the
/// structured "Invalid data" response rather than a deserialization failure.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateScoreRequest {
    /// Player display name.
    pub name: Option<String>,
    /// Score achieved in the finished innings.
    pub score: Option<f64>,
}

impl Validate for UpdateScoreRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(ref name) = self.name {
            if let Err(e) = validate_player_name(name) {
                errors.add("name", e);
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Acknowledgement body for a stored score.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScoreAccepted {
    /// Always `"success"`.
    pub status: &'static str,
}

impl ScoreAccepted {
    /// The single success acknowledgement.
    pub fn success() -> Self {
        Self { status: "success" }
    }
}

/// Response body for `GET /leaderboard`: name → best score, best first.
#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct LeaderboardResponse(
    /// Ordered name → score pairs.
    pub IndexMap<String, f64>,
);

impl FromIterator<(String, f64)> for LeaderboardResponse {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_fails_validation() {
        let request = UpdateScoreRequest {
            name: Some("   ".into()),
            score: Some(10.0),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn absent_fields_pass_validation() {
        // Presence is the service layer's concern; validation only checks
        // values that were supplied.
        let request = UpdateScoreRequest {
            name: None,
            score: None,
        };
        assert!(request.validate().is_ok());
    }
}
