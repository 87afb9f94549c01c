use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the gully cricket backend.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::pages::index,
        crate::routes::play::plan_next_delivery,
        crate::routes::score::update_score,
        crate::routes::score::get_leaderboard,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::common::PointDto,
            crate::dto::play::PlanDeliveryRequest,
            crate::dto::play::PlanDeliveryResponse,
            crate::dto::score::UpdateScoreRequest,
            crate::dto::score::ScoreAccepted,
            crate::dto::score::LeaderboardResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "play", description = "Session bootstrap and delivery planning"),
        (name = "score", description = "Leaderboard operations"),
    )
)]
pub struct ApiDoc;
