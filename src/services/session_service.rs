//! Session issuing for page loads.

use tracing::info;

use crate::state::SharedState;

/// Create a fresh session and return its opaque identifier.
pub fn create_session(state: &SharedState) -> String {
    let session_id = state.create_session();
    info!(session = %session_id, "created session");
    session_id
}
