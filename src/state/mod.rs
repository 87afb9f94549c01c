//! Shared application state: session store and leaderboard.

pub mod field;
pub mod hot_zones;
pub mod session;

use std::sync::Arc;

use dashmap::{DashMap, mapref::entry::Entry};
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::state::field::Point;

pub use self::session::{Session, SessionError};

/// Cheaply clonable handle to the application state.
pub type SharedState = Arc<AppState>;

/// Central application state owning the session map and the leaderboard.
///
/// Constructed once at startup and shared behind an [`Arc`]; all mutation
/// goes through explicit synchronization (sharded locks for sessions, a
/// reader-writer lock for the leaderboard).
pub struct AppState {
    config: AppConfig,
    sessions: DashMap<String, Session>,
    leaderboard: RwLock<IndexMap<String, f64>>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(config: AppConfig) -> SharedState {
        Arc::new(Self {
            config,
            sessions: DashMap::new(),
            leaderboard: RwLock::new(IndexMap::new()),
        })
    }

    /// Immutable runtime configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Register a fresh session and return its opaque identifier.
    ///
    /// Identifiers come from a cryptographically random UUID; the loop
    /// re-draws on the (vanishingly rare) collision instead of clobbering an
    /// existing session's history.
    pub fn create_session(&self) -> String {
        loop {
            let id = Uuid::new_v4().simple().to_string();
            match self.sessions.entry(id.clone()) {
                Entry::Occupied(_) => continue,
                Entry::Vacant(slot) => {
                    slot.insert(Session::default());
                    return id;
                }
            }
        }
    }

    /// Append a shot landing position to the session's history.
    pub fn record_shot(&self, session_id: &str, pos: Point) -> Result<(), SessionError> {
        let mut session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| SessionError::Unknown(session_id.to_string()))?;
        session.shot_history.push(pos);
        Ok(())
    }

    /// Snapshot the full shot history for a session.
    pub fn shot_history(&self, session_id: &str) -> Result<Vec<Point>, SessionError> {
        let session = self
            .sessions
            .get(session_id)
            .ok_or_else(|| SessionError::Unknown(session_id.to_string()))?;
        Ok(session.shot_history.clone())
    }

    /// Store `score` for `name` if it beats the best seen so far.
    ///
    /// The first score for a name is always stored. Returns the best score
    /// on record after the update.
    pub async fn update_score(&self, name: &str, score: f64) -> f64 {
        let mut board = self.leaderboard.write().await;
        match board.entry(name.to_string()) {
            indexmap::map::Entry::Occupied(mut entry) => {
                if score > *entry.get() {
                    entry.insert(score);
                }
                *entry.get()
            }
            indexmap::map::Entry::Vacant(entry) => *entry.insert(score),
        }
    }

    /// Up to `limit` leaderboard entries, best score first.
    ///
    /// Ties keep insertion order: the sort is stable and the underlying map
    /// iterates in the order names were first seen.
    pub async fn top_scores(&self, limit: usize) -> Vec<(String, f64)> {
        let board = self.leaderboard.read().await;
        let mut entries: Vec<(String, f64)> = board
            .iter()
            .map(|(name, score)| (name.clone(), *score))
            .collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries.truncate(limit);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> SharedState {
        AppState::new(AppConfig::default())
    }

    #[test]
    fn created_sessions_are_distinct_and_empty() {
        let state = state();
        let a = state.create_session();
        let b = state.create_session();

        assert_ne!(a, b);
        assert!(state.shot_history(&a).unwrap().is_empty());
        assert!(state.shot_history(&b).unwrap().is_empty());
    }

    #[test]
    fn record_shot_appends_in_order() {
        let state = state();
        let id = state.create_session();

        state.record_shot(&id, Point::new(10.0, 20.0)).unwrap();
        state.record_shot(&id, Point::new(30.0, 40.0)).unwrap();

        let history = state.shot_history(&id).unwrap();
        assert_eq!(history, vec![Point::new(10.0, 20.0), Point::new(30.0, 40.0)]);
    }

    #[test]
    fn unknown_session_is_an_error() {
        let state = state();
        assert!(matches!(
            state.record_shot("nope", Point::new(0.0, 0.0)),
            Err(SessionError::Unknown(_))
        ));
        assert!(matches!(
            state.shot_history("nope"),
            Err(SessionError::Unknown(_))
        ));
    }

    #[tokio::test]
    async fn scores_only_move_upward() {
        let state = state();

        assert_eq!(state.update_score("A", 50.0).await, 50.0);
        assert_eq!(state.update_score("A", 30.0).await, 50.0);
        assert_eq!(state.update_score("A", 70.0).await, 70.0);

        let top = state.top_scores(10).await;
        assert_eq!(top, vec![("A".to_string(), 70.0)]);
    }

    #[tokio::test]
    async fn top_scores_sorts_and_truncates() {
        let state = state();
        for i in 0..15u32 {
            state
                .update_score(&format!("player-{i}"), f64::from(i))
                .await;
        }

        let top = state.top_scores(10).await;
        assert_eq!(top.len(), 10);
        assert_eq!(top[0], ("player-14".to_string(), 14.0));
        assert_eq!(top[9], ("player-5".to_string(), 5.0));
        for pair in top.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[tokio::test]
    async fn ties_keep_insertion_order() {
        let state = state();
        state.update_score("first", 10.0).await;
        state.update_score("second", 10.0).await;
        state.update_score("third", 10.0).await;

        let top = state.top_scores(10).await;
        let names: Vec<&str> = top.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }
}
