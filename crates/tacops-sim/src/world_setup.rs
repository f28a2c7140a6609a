//! Entity spawn factories for setting up the simulation world.

use std::f32::consts::TAU;

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use tacops_core::catalog::{difficulty_profile, wave_enemy_count, DifficultyProfile};
use tacops_core::components::*;
use tacops_core::constants::*;
use tacops_core::enums::{Difficulty, EnemyState};
use tacops_core::types::{Position, Velocity};

/// Spawn one wave of enemies. Returns the number spawned.
pub fn spawn_wave(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_unit_id: &mut u32,
    wave: u32,
    difficulty: Difficulty,
) -> u32 {
    let profile = difficulty_profile(difficulty);
    let count = wave_enemy_count(difficulty, wave);
    for _ in 0..count {
        spawn_enemy(world, rng, next_unit_id, &profile);
    }
    count
}

/// Spawn a single enemy at a random spot in the top band of the arena,
/// patrolling in a random direction.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_unit_id: &mut u32,
    profile: &DifficultyProfile,
) -> hecs::Entity {
    let position = Position::new(
        rng.gen_range(0.0..WORLD_WIDTH),
        rng.gen_range(0.0..ENEMY_SPAWN_BAND),
    );
    world.spawn((
        alloc_unit_id(next_unit_id),
        position,
        Health {
            current: profile.enemy_health,
            max: profile.enemy_health,
        },
        EnemyBrain {
            state: EnemyState::Patrol,
            facing: rng.gen_range(0.0..TAU),
            speed: profile.enemy_speed,
            last_shot_tick: None,
        },
    ))
}

/// Spawn the squad allies at their fixed positions, once per session.
pub fn spawn_allies(world: &mut World, next_unit_id: &mut u32) {
    for (x, y) in ALLY_SPAWN_POSITIONS {
        world.spawn((
            alloc_unit_id(next_unit_id),
            Position::new(x, y),
            Health {
                current: ALLY_MAX_HEALTH,
                max: ALLY_MAX_HEALTH,
            },
            AllyStatus::default(),
        ));
    }
}

/// Spawn a bullet travelling along `bearing` at `speed` units per tick.
pub fn spawn_bullet(
    world: &mut World,
    next_unit_id: &mut u32,
    origin: Position,
    bearing: f32,
    speed: f32,
    friendly: bool,
) -> hecs::Entity {
    world.spawn((
        alloc_unit_id(next_unit_id),
        origin,
        Velocity::from_bearing(bearing, speed),
        Projectile { friendly },
    ))
}

/// Ids are monotonic and never reused within a session.
fn alloc_unit_id(next_unit_id: &mut u32) -> UnitId {
    let id = *next_unit_id;
    *next_unit_id += 1;
    UnitId { id }
}
