//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to start.
    #[default]
    Ready,
    /// Game running, systems advance every tick.
    Active,
    /// Frozen mid-game; resumable.
    Paused,
    /// The player hit a hurdle. Terminal until restart.
    GameOver,
}
