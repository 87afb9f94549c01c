//! Leaderboard updates and reads.

use tracing::info;

use crate::{
    dto::score::{LeaderboardResponse, UpdateScoreRequest},
    error::ServiceError,
    state::SharedState,
};

/// Maximum number of entries exposed on the public leaderboard.
const LEADERBOARD_LIMIT: usize = 10;

/// Record a finished innings on the leaderboard.
///
/// Only the best score per player is kept; a lower score is acknowledged but
/// changes nothing.
pub async fn update_score(
    state: &SharedState,
    request: UpdateScoreRequest,
) -> Result<(), ServiceError> {
    let name = request
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ServiceError::InvalidInput("missing player name".into()))?;
    let score = request
        .score
        .ok_or_else(|| ServiceError::InvalidInput("missing score".into()))?;

    let best = state.update_score(name, score).await;
    info!(player = name, score, best, "score submitted");
    Ok(())
}

/// Top scores, best first, capped at [`LEADERBOARD_LIMIT`].
pub async fn leaderboard(state: &SharedState) -> LeaderboardResponse {
    state.top_scores(LEADERBOARD_LIMIT).await.into_iter().collect()
}
