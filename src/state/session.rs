//! Per-player session data.

use thiserror::Error;

use crate::state::field::Point;

/// Server-side record of one player's game, keyed by an opaque identifier
/// issued on page load.
///
/// Sessions live for the lifetime of the process; nothing evicts them.
#[derive(Debug, Default, Clone)]
pub struct Session {
    /// Shot landing positions in delivery order.
    pub shot_history: Vec<Point>,
}

/// Errors raised by session lookups.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The request carried no usable session identifier.
    #[error("missing session identifier")]
    Missing,
    /// The identifier is not registered in the session store.
    #[error("unknown session {0}")]
    Unknown(String),
}
