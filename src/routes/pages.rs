//! Page routes. The game itself runs client-side; the backend only serves a
//! minimal page with the freshly issued session identifier baked in.

use axum::{Router, extract::State, response::Html, routing::get};

use crate::{
    config::{BATSMAN_POS, CANVAS_HEIGHT, CANVAS_WIDTH},
    services::session_service,
    state::SharedState,
};

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Gully Cricket</title>
</head>
<body>
  <h1>Gully Cricket</h1>
  <canvas id="pitch" width="__CANVAS_WIDTH__" height="__CANVAS_HEIGHT__"></canvas>
  <script>
    window.GULLY = {
      sessionId: "__SESSION_ID__",
      canvas: { width: __CANVAS_WIDTH__, height: __CANVAS_HEIGHT__ },
      batsman: { x: __BATSMAN_X__, y: __BATSMAN_Y__ }
    };
  </script>
</body>
</html>
"#;

#[utoipa::path(
    get,
    path = "/",
    tag = "play",
    responses((status = 200, description = "Game page with an embedded session identifier"))
)]
/// Create a session and return the game page embedding its identifier.
pub async fn index(State(state): State<SharedState>) -> Html<String> {
    let session_id = session_service::create_session(&state);
    Html(render_index(&session_id))
}

/// Configure the page routes subtree.
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(index))
}

/// Substitute the session identifier and canvas constants into the template.
fn render_index(session_id: &str) -> String {
    INDEX_TEMPLATE
        .replace("__SESSION_ID__", session_id)
        .replace("__CANVAS_WIDTH__", &CANVAS_WIDTH.to_string())
        .replace("__CANVAS_HEIGHT__", &CANVAS_HEIGHT.to_string())
        .replace("__BATSMAN_X__", &BATSMAN_POS.x.to_string())
        .replace("__BATSMAN_Y__", &BATSMAN_POS.y.to_string())
}
