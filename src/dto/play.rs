//! Wire types for delivery planning.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::common::PointDto;

/// Request body for `POST /plan-next-delivery`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanDeliveryRequest {
    /// Session identifier issued on page load. Absent or unknown values are
    /// rejected as an invalid session, not a malformed request.
    pub session_id: Option<String>,
    /// Where the previous shot landed, if the batter connected.
    pub last_shot_landing_pos: Option<PointDto>,
    /// Over counter used to cycle through the base field presets.
    #[serde(default)]
    pub overs: u32,
}

/// Response body for `POST /plan-next-delivery`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanDeliveryResponse {
    /// Exactly 11 fielder positions.
    pub fielders: Vec<PointDto>,
    /// Delivery style for the next ball: swing, spin, fast or yorker.
    pub ball_type: String,
}
