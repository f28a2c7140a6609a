//! Enemy behavior finite state machine.
//!
//! Computes state transitions, heading, and fire decisions for one enemy
//! from its distance to the player. The tick engine applies the resulting
//! movement and spawns any bullets.

use std::f32::consts::TAU;

use rand::Rng;

use tacops_core::constants::*;
use tacops_core::enums::EnemyState;
use tacops_core::types::Position;

/// Input to the enemy FSM for a single entity.
pub struct EnemyContext {
    pub state: EnemyState,
    pub position: Position,
    /// Current heading in radians.
    pub facing: f32,
    /// The player's fixed position.
    pub target: Position,
    pub distance_to_target: f32,
    /// Ticks since this enemy last fired. `None` if it never has.
    pub ticks_since_last_shot: Option<u64>,
}

/// Output from the enemy FSM.
pub struct EnemyUpdate {
    pub new_state: EnemyState,
    pub new_facing: f32,
    /// Whether the enemy fires at the player this tick.
    pub fire: bool,
    pub state_changed: bool,
}

/// Evaluate the FSM for one enemy.
///
/// Transitions depend only on the current distance to the player:
/// under ATTACK_RANGE the enemy attacks (re-aiming every tick), under
/// COVER_RANGE it holds course and fire, otherwise it patrols with an
/// occasional random heading change. State change, fire, and movement
/// all take effect within the same tick.
pub fn evaluate<R: Rng>(ctx: &EnemyContext, rng: &mut R) -> EnemyUpdate {
    let (new_state, new_facing, fire) = if ctx.distance_to_target < ATTACK_RANGE {
        let aim = ctx.position.bearing_to(&ctx.target);
        (EnemyState::Attack, aim, cooldown_ready(ctx.ticks_since_last_shot))
    } else if ctx.distance_to_target < COVER_RANGE {
        (EnemyState::Cover, ctx.facing, false)
    } else {
        let facing = if rng.gen_bool(PATROL_TURN_CHANCE) {
            rng.gen_range(0.0..TAU)
        } else {
            ctx.facing
        };
        (EnemyState::Patrol, facing, false)
    };

    EnemyUpdate {
        new_state,
        new_facing,
        fire,
        state_changed: new_state != ctx.state,
    }
}

/// Movement speed for a state: attacking enemies push harder.
pub fn move_speed(state: EnemyState, base_speed: f32) -> f32 {
    match state {
        EnemyState::Attack => base_speed * ATTACK_SPEED_FACTOR,
        EnemyState::Patrol | EnemyState::Cover => base_speed,
    }
}

fn cooldown_ready(ticks_since_last_shot: Option<u64>) -> bool {
    match ticks_since_last_shot {
        None => true,
        Some(elapsed) => elapsed >= ms_to_ticks(ENEMY_FIRE_COOLDOWN_MS) as u64,
    }
}
