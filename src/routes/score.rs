use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use validator::Validate;

use crate::{
    dto::score::{LeaderboardResponse, ScoreAccepted, UpdateScoreRequest},
    error::AppError,
    services::score_service,
    state::SharedState,
};

/// Routes handling leaderboard reads and writes.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/update-score", post(update_score))
        .route("/leaderboard", get(get_leaderboard))
}

/// Submit a finished innings score for the leaderboard.
#[utoipa::path(
    post,
    path = "/update-score",
    tag = "score",
    request_body = UpdateScoreRequest,
    responses(
        (status = 200, description = "Score accepted", body = ScoreAccepted),
        (status = 400, description = "Missing or invalid name/score")
    )
)]
pub async fn update_score(
    State(state): State<SharedState>,
    payload: Result<Json<UpdateScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreAccepted>, AppError> {
    // A body that does not even parse gets the same structured "Invalid
    // data" answer as one with missing fields.
    let Json(request) =
        payload.map_err(|rejection| AppError::InvalidData(rejection.to_string()))?;
    request.validate()?;
    score_service::update_score(&state, request).await?;
    Ok(Json(ScoreAccepted::success()))
}

/// Return the top scores, best first.
#[utoipa::path(
    get,
    path = "/leaderboard",
    tag = "score",
    responses((status = 200, description = "Up to 10 name/score pairs, descending", body = LeaderboardResponse))
)]
pub async fn get_leaderboard(State(state): State<SharedState>) -> Json<LeaderboardResponse> {
    Json(score_service::leaderboard(&state).await)
}
