//! Game state snapshot — the complete visible state handed to the
//! frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::GameEvent;
use crate::types::GameTime;

/// Complete game state produced by the engine after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: GameTime,
    pub phase: GamePhase,
    pub score: u32,
    pub world: WorldView,
    pub player: PlayerView,
    pub platforms: Vec<RectView>,
    pub coins: Vec<RectView>,
    pub hurdles: Vec<RectView>,
    /// Events accumulated since the previous snapshot.
    pub events: Vec<GameEvent>,
}

/// World dimensions, for the frontend to size its viewport.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WorldView {
    pub width: f64,
    pub height: f64,
}

/// The player sprite as drawn.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical velocity (pixels per tick, positive = falling).
    pub velocity_y: f64,
    /// Jumps taken since last landing.
    pub jump_count: u8,
    pub airborne: bool,
}

/// An axis-aligned rectangle as drawn (platforms, coins, hurdles).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RectView {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}
