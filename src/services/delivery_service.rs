//! Core of the game loop: record the last shot, cluster the history into hot
//! zones, and adapt the base field toward them.

use tracing::debug;

use crate::{
    dto::{
        common::PointDto,
        play::{PlanDeliveryRequest, PlanDeliveryResponse},
    },
    error::ServiceError,
    state::{
        SessionError, SharedState,
        field::{self, BallType, FIELDERS_PER_SIDE},
        hot_zones,
    },
};

/// Plan the next delivery for a session.
///
/// Appends the last shot (when present) to the session history, re-clusters
/// the full history, places fielders from the over's base preset with hot
/// zones overriding the designated slots, and draws a random delivery style.
pub fn plan_next_delivery(
    state: &SharedState,
    request: PlanDeliveryRequest,
) -> Result<PlanDeliveryResponse, ServiceError> {
    let session_id = request
        .session_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or(SessionError::Missing)
        .map_err(ServiceError::from)?;

    if let Some(pos) = request.last_shot_landing_pos {
        state.record_shot(session_id, pos.into())?;
    }
    let history = state.shot_history(session_id)?;

    let zones = hot_zones::predict(&history);
    let template = state.config().preset_for_over(request.overs);
    let fielders = field::adapt_layout(template, &zones);
    if fielders.len() != FIELDERS_PER_SIDE {
        // Config validation guarantees 11-fielder presets; anything else is a bug.
        return Err(ServiceError::Internal(format!(
            "adapted layout has {} fielders",
            fielders.len()
        )));
    }
    let ball_type = BallType::random(&mut rand::rng());

    debug!(
        session = session_id,
        shots = history.len(),
        zones = zones.len(),
        overs = request.overs,
        ball = ball_type.as_str(),
        "planned next delivery"
    );

    Ok(PlanDeliveryResponse {
        fielders: fielders.into_iter().map(PointDto::from).collect(),
        ball_type: ball_type.as_str().to_owned(),
    })
}
