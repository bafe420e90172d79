//! ECS systems that operate on the game world each tick.
//!
//! Systems are free functions that take `&mut World` (or `&World` for
//! read-only). They do not own state — all state lives in components
//! or in the engine.

pub mod cleanup;
pub mod collision;
pub mod movement;
pub mod physics;
pub mod player_control;
pub mod snapshot;
pub mod spawner;
