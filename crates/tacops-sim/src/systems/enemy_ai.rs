//! Enemy AI system — drives each enemy's state machine every tick.
//!
//! Calls the pure FSM from tacops-ai to compute state, heading, and fire
//! decisions, then applies movement (with the arena clamp) and spawns any
//! enemy bullets. Bullets spawned here sit still until the next tick's
//! movement pass and are not collision-tested this tick.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use tacops_core::components::EnemyBrain;
use tacops_core::constants::{ENEMY_AREA_HEIGHT, ENEMY_BULLET_SPEED, WORLD_WIDTH};
use tacops_core::types::Position;

use tacops_ai::fsm::{evaluate, move_speed, EnemyContext, EnemyUpdate};

use crate::world_setup;

/// Run the enemy AI system: evaluate the FSM for each enemy, apply
/// heading/state updates, fire, and move.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_unit_id: &mut u32,
    current_tick: u64,
    player_pos: &Position,
) {
    // Collect decisions in a buffer to avoid borrow issues with hecs.
    let mut decisions: Vec<(hecs::Entity, Position, f32, EnemyUpdate)> = Vec::new();

    {
        let mut query = world.query::<(&EnemyBrain, &Position)>();
        for (entity, (brain, pos)) in query.iter() {
            let ctx = EnemyContext {
                state: brain.state,
                position: *pos,
                facing: brain.facing,
                target: *player_pos,
                distance_to_target: pos.distance_to(player_pos),
                ticks_since_last_shot: brain
                    .last_shot_tick
                    .map(|tick| current_tick.saturating_sub(tick)),
            };
            let update = evaluate(&ctx, rng);
            decisions.push((entity, *pos, brain.speed, update));
        }
    }

    for (entity, pos, speed, update) in decisions {
        if update.fire {
            let aim = pos.bearing_to(player_pos);
            world_setup::spawn_bullet(world, next_unit_id, pos, aim, ENEMY_BULLET_SPEED, false);
        }

        if let Ok(mut brain) = world.get::<&mut EnemyBrain>(entity) {
            brain.state = update.new_state;
            brain.facing = update.new_facing;
            if update.fire {
                brain.last_shot_tick = Some(current_tick);
            }
        }

        let step = move_speed(update.new_state, speed);
        if let Ok(mut position) = world.get::<&mut Position>(entity) {
            position.x = (position.x + update.new_facing.cos() * step).clamp(0.0, WORLD_WIDTH);
            position.y = (position.y + update.new_facing.sin() * step).clamp(0.0, ENEMY_AREA_HEIGHT);
        }
    }
}
