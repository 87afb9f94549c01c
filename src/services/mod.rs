/// Delivery planning: shot tracking, hot zones, field adaptation.
pub mod delivery_service;
/// OpenAPI document aggregation.
pub mod documentation;
/// Health status reporting.
pub mod health_service;
/// Leaderboard updates and reads.
pub mod score_service;
/// Session issuing for page loads.
pub mod session_service;
