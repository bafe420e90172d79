//! Events emitted by the game for frontend feedback.

use serde::{Deserialize, Serialize};

/// Gameplay events surfaced in each snapshot for the frontend
/// (sound cues, HUD flashes, logging).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The player left the ground (or jumped again mid-air).
    Jumped { double: bool },
    /// The player landed on a platform.
    Landed,
    /// A coin was picked up.
    CoinCollected { value: u32, score: u32 },
    /// The player collided with a hurdle. Game over.
    HurdleHit { tick: u64 },
}
