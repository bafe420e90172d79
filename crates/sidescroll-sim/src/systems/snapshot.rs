//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use sidescroll_core::components::{Coin, Extent, Hurdle, JumpState, Platform, Player};
use sidescroll_core::enums::GamePhase;
use sidescroll_core::events::GameEvent;
use sidescroll_core::state::{GameStateSnapshot, PlayerView, RectView, WorldView};
use sidescroll_core::types::{GameTime, Position, Velocity};

use crate::engine::GameConfig;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &GameTime,
    phase: GamePhase,
    score: u32,
    config: &GameConfig,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        score,
        world: WorldView {
            width: config.world_width,
            height: config.world_height,
        },
        player: build_player(world),
        platforms: build_rects::<Platform>(world),
        coins: build_rects::<Coin>(world),
        hurdles: build_rects::<Hurdle>(world),
        events,
    }
}

fn build_player(world: &World) -> PlayerView {
    let mut query = world.query::<(&Player, &Position, &Velocity, &Extent, &JumpState)>();
    query
        .iter()
        .next()
        .map(|(_e, (_p, pos, vel, ext, jump))| PlayerView {
            x: pos.x,
            y: pos.y,
            width: ext.width,
            height: ext.height,
            velocity_y: vel.y,
            jump_count: jump.jump_count,
            airborne: jump.airborne,
        })
        .unwrap_or_default()
}

/// Collect the bounding boxes of all entities with the given marker.
fn build_rects<M: hecs::Component>(world: &World) -> Vec<RectView> {
    let mut query = world.query::<(&M, &Position, &Extent)>();
    query
        .iter()
        .map(|(_e, (_m, pos, ext))| RectView {
            x: pos.x,
            y: pos.y,
            width: ext.width,
            height: ext.height,
        })
        .collect()
}
