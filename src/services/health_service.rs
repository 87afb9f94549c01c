use crate::dto::health::HealthResponse;

/// Respond with a static health payload.
///
/// All state is in-process, so there is no external dependency to probe.
pub async fn health_status() -> HealthResponse {
    HealthResponse::ok()
}
