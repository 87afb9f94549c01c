//! Validation helpers for DTOs.

use validator::ValidationError;

/// Longest player name accepted on the leaderboard.
const MAX_NAME_LENGTH: usize = 64;

/// Validates that a player name is non-blank and of reasonable length.
///
/// # Examples
///
/// ```ignore
/// validate_player_name("Kohli")  // Ok
/// validate_player_name("")       // Err - empty
/// validate_player_name("   ")    // Err - blank
/// ```
pub fn validate_player_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("player_name_blank");
        err.message = Some("Player name must not be blank".into());
        return Err(err);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        let mut err = ValidationError::new("player_name_length");
        err.message = Some(
            format!(
                "Player name must be at most {MAX_NAME_LENGTH} characters (got {})",
                name.chars().count()
            )
            .into(),
        );
        return Err(err);
    }

    Ok(())
}
