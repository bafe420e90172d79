//! Vertical physics: gravity and platform landing.
//!
//! Gravity only applies to jump-capable entities — coins and hurdles
//! are pure scrollers and ignore it. Landing runs after integration:
//! an entity lands on a platform when its bottom edge crossed the
//! platform's top edge during this tick while falling.

use hecs::World;

use sidescroll_core::components::{Extent, JumpState, Platform};
use sidescroll_core::constants::GRAVITY;
use sidescroll_core::events::GameEvent;
use sidescroll_core::types::{Aabb, Position, Velocity};

use crate::engine::GameConfig;

/// Accelerate jump-capable entities downward.
pub fn apply_gravity(world: &mut World) {
    for (_entity, (vel, _jump)) in world.query_mut::<(&mut Velocity, &JumpState)>() {
        vel.y += GRAVITY;
    }
}

/// Land falling entities on platform tops and clamp them to the world
/// floor. Resets the jump count on landing — the only place it resets.
pub fn resolve_platform_collisions(
    world: &mut World,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) {
    // Platform rects are read up front so the mutable pass below can
    // borrow the world freely.
    let platforms: Vec<Aabb> = world
        .query_mut::<(&Platform, &Position, &Extent)>()
        .into_iter()
        .map(|(_e, (_p, pos, ext))| Aabb::new(pos.x, pos.y, ext.width, ext.height))
        .collect();

    for (_entity, (pos, vel, ext, jump)) in
        world.query_mut::<(&mut Position, &mut Velocity, &Extent, &mut JumpState)>()
    {
        let body = Aabb::new(pos.x, pos.y, ext.width, ext.height);

        for platform in &platforms {
            let crossed_top =
                body.bottom() >= platform.top() && body.bottom() - vel.y <= platform.top();
            if vel.y > 0.0 && body.overlaps_horizontally(platform) && crossed_top {
                pos.y = platform.top() - ext.height;
                vel.y = 0.0;
                if jump.airborne {
                    events.push(GameEvent::Landed);
                }
                jump.jump_count = 0;
                jump.airborne = false;
            }
        }

        // Never fall through the bottom of the world.
        if pos.y + ext.height > config.world_height {
            pos.y = config.world_height - ext.height;
            vel.y = 0.0;
            if jump.airborne {
                events.push(GameEvent::Landed);
            }
            jump.jump_count = 0;
            jump.airborne = false;
        }
    }
}
