//! Bullet movement system.
//!
//! Advances every projectile by its velocity (velocities are stored in
//! world units per tick) and discards any that leave the arena. Runs
//! before AI and collision, so a bullet spawned last tick moves exactly
//! once before it can hit anything.

use hecs::World;

use tacops_core::components::Projectile;
use tacops_core::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use tacops_core::types::{Position, Velocity};

/// Advance all bullets; cull those outside [0,800]x[0,600].
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<hecs::Entity>) {
    despawn_buffer.clear();

    for (entity, (pos, vel, _proj)) in
        world.query_mut::<(&mut Position, &Velocity, &Projectile)>()
    {
        pos.x += vel.x;
        pos.y += vel.y;

        if pos.x < 0.0 || pos.x > WORLD_WIDTH || pos.y < 0.0 || pos.y > WORLD_HEIGHT {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
