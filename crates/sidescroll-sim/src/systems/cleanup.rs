//! Cleanup system: removes coins and hurdles that scrolled off the
//! left edge of the world.
//!
//! Uses a pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use sidescroll_core::components::{Coin, Extent, Hurdle};
use sidescroll_core::types::Position;

/// Despawn scrolling entities whose right edge has passed x = 0.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_coin, pos, ext)) in world.query_mut::<(&Coin, &Position, &Extent)>() {
        if pos.x + ext.width < 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (_hurdle, pos, ext)) in world.query_mut::<(&Hurdle, &Position, &Extent)>() {
        if pos.x + ext.width < 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
