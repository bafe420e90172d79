//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

/// Width and height of an entity's bounding box (pixels).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

/// Jump bookkeeping for entities that can jump (the player).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct JumpState {
    /// Jumps taken since last landing (0, 1, or 2).
    pub jump_count: u8,
    /// Whether the entity is currently off the ground.
    pub airborne: bool,
}

/// Per-tick input intent, set by queued commands and cleared by the
/// player control system after consumption.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MoveIntent {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Marks the player entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks a collectible coin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coin;

/// Marks a hurdle the player must avoid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hurdle;

/// Marks a static platform the player can land on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Platform;

// Position and Velocity (defined in types.rs) are used as ECS
// components as well.
