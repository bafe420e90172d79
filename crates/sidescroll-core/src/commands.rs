//! Player commands sent from the frontend to the game engine.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Movement ---
    /// Walk left for one tick. Sent every tick the key is held.
    MoveLeft,
    /// Walk right for one tick. Sent every tick the key is held.
    MoveRight,
    /// Jump (or double-jump while airborne). Sent once per key press.
    Jump,

    // --- Game control ---
    /// Start a new game from the ready screen or after game over.
    StartGame,
    /// Rebuild the entire game state and start over.
    Restart,
    /// Pause the game.
    Pause,
    /// Resume a paused game.
    Resume,
}
