use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};

use crate::{
    dto::play::{PlanDeliveryRequest, PlanDeliveryResponse},
    error::AppError,
    services::delivery_service,
    state::SharedState,
};

/// Routes handling delivery planning.
pub fn router() -> Router<SharedState> {
    Router::new().route("/plan-next-delivery", post(plan_next_delivery))
}

/// Record the last shot and plan the next delivery for a session.
#[utoipa::path(
    post,
    path = "/plan-next-delivery",
    tag = "play",
    request_body = PlanDeliveryRequest,
    responses(
        (status = 200, description = "Adapted field and delivery style", body = PlanDeliveryResponse),
        (status = 400, description = "Malformed body or invalid session"),
        (status = 500, description = "Unexpected internal failure")
    )
)]
pub async fn plan_next_delivery(
    State(state): State<SharedState>,
    payload: Result<Json<PlanDeliveryRequest>, JsonRejection>,
) -> Result<Json<PlanDeliveryResponse>, AppError> {
    let Json(request) = payload?;
    let response = delivery_service::plan_next_delivery(&state, request)?;
    Ok(Json(response))
}
