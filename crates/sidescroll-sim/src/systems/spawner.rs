//! Spawning system — rolls per-tick spawn chances for coins and
//! hurdles at the right edge of the world.
//!
//! Both rolls happen every tick in a fixed order so that a given seed
//! always produces the same spawn sequence.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::engine::GameConfig;
use crate::world_setup;

/// Roll spawn chances and create any new coins and hurdles.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, config: &GameConfig) {
    if rng.gen_bool(config.coin_spawn_chance) {
        world_setup::spawn_coin(world, rng, config);
    }

    if rng.gen_bool(config.hurdle_spawn_chance) {
        world_setup::spawn_hurdle(world, config);
    }
}
