//! Entity spawn factories for setting up the game world.
//!
//! Creates the player, the ground platform, and the scrolling coin and
//! hurdle entities with appropriate component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use sidescroll_core::components::*;
use sidescroll_core::constants::*;
use sidescroll_core::types::{Position, Velocity};

use crate::engine::GameConfig;

/// Set up the initial world: the player and the ground platform.
/// Coins and hurdles are spawned by the spawner system.
pub fn setup_world(world: &mut World, config: &GameConfig) {
    spawn_player(world, config);
    spawn_ground(world, config);
}

/// Spawn the player at the left side of the world, above the ground.
pub fn spawn_player(world: &mut World, config: &GameConfig) -> hecs::Entity {
    world.spawn((
        Player,
        Position::new(PLAYER_SPAWN_X, config.world_height - PLAYER_SPAWN_CLEARANCE),
        Velocity::new(0.0, 0.0),
        Extent {
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
        },
        JumpState::default(),
        MoveIntent::default(),
    ))
}

/// Spawn the static ground platform spanning the full world width.
pub fn spawn_ground(world: &mut World, config: &GameConfig) -> hecs::Entity {
    world.spawn((
        Platform,
        Position::new(0.0, config.world_height - GROUND_THICKNESS),
        Extent {
            width: config.world_width,
            height: GROUND_THICKNESS,
        },
    ))
}

/// Spawn a coin at the right edge, at a random height within the spawn
/// band, scrolling left.
pub fn spawn_coin(world: &mut World, rng: &mut ChaCha8Rng, config: &GameConfig) -> hecs::Entity {
    let y = rng.gen_range(COIN_BAND_TOP..config.world_height - COIN_BAND_BOTTOM);
    spawn_coin_at(world, config.world_width, y)
}

/// Spawn a coin at an explicit position.
pub fn spawn_coin_at(world: &mut World, x: f64, y: f64) -> hecs::Entity {
    world.spawn((
        Coin,
        Position::new(x, y),
        Velocity::new(-SCROLL_SPEED, 0.0),
        Extent {
            width: COIN_SIZE,
            height: COIN_SIZE,
        },
    ))
}

/// Spawn a hurdle at the right edge, resting on the ground, scrolling
/// left.
pub fn spawn_hurdle(world: &mut World, config: &GameConfig) -> hecs::Entity {
    spawn_hurdle_at(
        world,
        config.world_width,
        config.world_height - HURDLE_GROUND_OFFSET,
    )
}

/// Spawn a hurdle at an explicit position.
pub fn spawn_hurdle_at(world: &mut World, x: f64, y: f64) -> hecs::Entity {
    world.spawn((
        Hurdle,
        Position::new(x, y),
        Velocity::new(-SCROLL_SPEED, 0.0),
        Extent {
            width: HURDLE_SIZE,
            height: HURDLE_SIZE,
        },
    ))
}
