//! Request/response types for the HTTP API.

pub mod common;
pub mod health;
pub mod play;
pub mod score;
pub mod validation;
