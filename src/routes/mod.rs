use axum::Router;

use crate::state::SharedState;

pub mod docs;
pub mod health;
pub mod pages;
pub mod play;
pub mod score;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = pages::router()
        .merge(health::router())
        .merge(play::router())
        .merge(score::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
