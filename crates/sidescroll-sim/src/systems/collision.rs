//! Collision system — AABB checks between the player and the
//! scrolling entities.
//!
//! Coins are collected (despawned, score increased); any hurdle
//! contact is the terminal game-over condition, reported to the engine
//! via the return value.

use hecs::World;

use sidescroll_core::components::{Coin, Extent, Hurdle, Player};
use sidescroll_core::constants::COIN_VALUE;
use sidescroll_core::events::GameEvent;
use sidescroll_core::types::{Aabb, Position};

/// Check player-vs-coin and player-vs-hurdle overlaps.
///
/// Returns `true` if the player hit a hurdle.
pub fn run(
    world: &mut World,
    score: &mut u32,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<hecs::Entity>,
    current_tick: u64,
) -> bool {
    let player_body = match player_aabb(world) {
        Some(body) => body,
        None => return false,
    };

    despawn_buffer.clear();

    // Coins: collect on contact.
    for (entity, (_coin, pos, ext)) in world.query_mut::<(&Coin, &Position, &Extent)>() {
        let coin_body = Aabb::new(pos.x, pos.y, ext.width, ext.height);
        if player_body.overlaps(&coin_body) {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
        *score += COIN_VALUE;
        events.push(GameEvent::CoinCollected {
            value: COIN_VALUE,
            score: *score,
        });
    }

    // Hurdles: any contact ends the game.
    let mut hit = false;
    for (_entity, (_hurdle, pos, ext)) in world.query_mut::<(&Hurdle, &Position, &Extent)>() {
        let hurdle_body = Aabb::new(pos.x, pos.y, ext.width, ext.height);
        if player_body.overlaps(&hurdle_body) {
            hit = true;
        }
    }
    if hit {
        events.push(GameEvent::HurdleHit { tick: current_tick });
    }

    hit
}

/// The player's current bounding box, if a player exists.
fn player_aabb(world: &World) -> Option<Aabb> {
    let mut query = world.query::<(&Player, &Position, &Extent)>();
    query
        .iter()
        .next()
        .map(|(_e, (_p, pos, ext))| Aabb::new(pos.x, pos.y, ext.width, ext.height))
}
