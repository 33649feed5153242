//! Error types for the asteroids crate
//!
//! Two classes only: programming errors surfaced by the simulation
//! (`InvalidOperand`) and leaderboard file I/O. There are no retry
//! semantics anywhere.

use thiserror::Error;

/// Errors produced by the game core
#[derive(Error, Debug)]
pub enum GameError {
    /// A collision check was invoked on a body that cannot collide
    /// (non-positive radius or non-finite position). This never occurs
    /// in a correct integration.
    #[error("collision check on a non-collidable body (radius {radius})")]
    InvalidOperand { radius: f32 },

    #[error("failed to read leaderboard file: {0}")]
    LeaderboardRead(#[source] std::io::Error),

    #[error("failed to write leaderboard file: {0}")]
    LeaderboardWrite(#[source] std::io::Error),
}
