//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick. Velocities are expressed
//! in pixels per tick, so integration is a plain addition: the player's
//! vertical motion and the leftward drift of coins and hurdles both go
//! through this one step.

use hecs::World;

use sidescroll_core::types::{Position, Velocity};

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x;
        pos.y += vel.y;
    }
}
