//! Player control system — consumes the per-tick move intent.
//!
//! Horizontal walking is applied directly to position (the player has
//! no horizontal inertia). Jumps set a vertical impulse: the first jump
//! from the ground, the second — stronger — from mid-air. A third jump
//! request is ignored until landing resets the count.

use hecs::World;

use sidescroll_core::components::{Extent, JumpState, MoveIntent, Player};
use sidescroll_core::constants::{DOUBLE_JUMP_IMPULSE, JUMP_IMPULSE, MAX_JUMPS, WALK_SPEED};
use sidescroll_core::events::GameEvent;
use sidescroll_core::types::{Position, Velocity};

use crate::engine::GameConfig;

/// Apply walk and jump intents to the player, then clear the intent.
pub fn run(world: &mut World, config: &GameConfig, events: &mut Vec<GameEvent>) {
    for (_entity, (_player, intent, pos, vel, jump, extent)) in world.query_mut::<(
        &Player,
        &mut MoveIntent,
        &mut Position,
        &mut Velocity,
        &mut JumpState,
        &Extent,
    )>() {
        if intent.left {
            pos.x -= WALK_SPEED;
        }
        if intent.right {
            pos.x += WALK_SPEED;
        }

        // The player never leaves the horizontal world bounds.
        pos.x = pos.x.clamp(0.0, config.world_width - extent.width);

        if intent.jump && jump.jump_count < MAX_JUMPS {
            let double = jump.jump_count > 0;
            vel.y = if double {
                DOUBLE_JUMP_IMPULSE
            } else {
                JUMP_IMPULSE
            };
            jump.jump_count += 1;
            jump.airborne = true;
            events.push(GameEvent::Jumped { double });
        }

        *intent = MoveIntent::default();
    }
}
