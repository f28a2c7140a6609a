//! Collision resolution system.
//!
//! Tests each surviving bullet against its valid targets: player bullets
//! against enemies, enemy bullets against the player first and then any
//! standing ally. A bullet is consumed by its first hit. Damage for
//! player bullets is computed from the weapon and outfit held at the
//! moment of impact, not at fire time.

use hecs::World;

use tacops_core::catalog::{difficulty_profile, outfit_profile, weapon_profile};
use tacops_core::components::{AllyStatus, EnemyBrain, Health, Projectile, UnitId};
use tacops_core::constants::{ALLY_HIT_RADIUS, HIT_RADIUS, KILL_SCORE};
use tacops_core::enums::Difficulty;
use tacops_core::events::GameEvent;
use tacops_core::types::Position;

use tacops_combat::damage::apply_damage;
use tacops_combat::hit::hit_test;

use crate::player::PlayerState;

/// What a collision pass did to the session.
#[derive(Debug, Default)]
pub struct CollisionOutcome {
    pub events: Vec<GameEvent>,
    pub score_gained: u32,
    /// Player health reached 0 this tick.
    pub player_died: bool,
}

/// Resolve collisions for `bullets` — the set that existed before this
/// tick's AI pass, so freshly fired enemy bullets wait a tick.
pub fn run(
    world: &mut World,
    bullets: &[hecs::Entity],
    player: &mut PlayerState,
    difficulty: Difficulty,
) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();

    // Bind-at-impact: read the player's current loadout once per tick.
    let player_damage = tacops_combat::damage::computed_damage(
        &weapon_profile(player.weapon),
        &outfit_profile(player.outfit),
    );
    let enemy_damage = difficulty_profile(difficulty).enemy_damage;

    for &bullet in bullets {
        // Culled out of bounds this tick, or already consumed.
        if !world.contains(bullet) {
            continue;
        }
        let (bullet_pos, friendly) = {
            let Ok(pos) = world.get::<&Position>(bullet) else {
                continue;
            };
            let Ok(proj) = world.get::<&Projectile>(bullet) else {
                continue;
            };
            (*pos, proj.friendly)
        };

        if friendly {
            resolve_player_bullet(world, bullet, &bullet_pos, player_damage, &mut outcome);
        } else {
            resolve_enemy_bullet(world, bullet, &bullet_pos, player, enemy_damage, &mut outcome);
        }
    }

    outcome
}

/// Player bullet: first enemy within radius takes the hit.
fn resolve_player_bullet(
    world: &mut World,
    bullet: hecs::Entity,
    bullet_pos: &Position,
    damage: i32,
    outcome: &mut CollisionOutcome,
) {
    let hit = {
        let mut query = world.query::<(&UnitId, &Position, &EnemyBrain)>();
        query
            .iter()
            .find(|(_, (_, pos, _))| hit_test(bullet_pos, pos, HIT_RADIUS))
            .map(|(entity, (unit, _, _))| (entity, unit.id))
    };

    let Some((enemy, enemy_id)) = hit else {
        return;
    };

    let _ = world.despawn(bullet);

    let dead = match world.get::<&mut Health>(enemy) {
        Ok(mut health) => {
            health.current = apply_damage(health.current, damage);
            health.current == 0
        }
        Err(_) => false,
    };

    if dead {
        let _ = world.despawn(enemy);
        outcome.score_gained += KILL_SCORE;
        outcome.events.push(GameEvent::EnemyKilled {
            enemy_id,
            melee: false,
        });
    }
}

/// Enemy bullet: the player is checked before allies, and the bullet is
/// consumed by whichever matches first.
fn resolve_enemy_bullet(
    world: &mut World,
    bullet: hecs::Entity,
    bullet_pos: &Position,
    player: &mut PlayerState,
    enemy_damage: i32,
    outcome: &mut CollisionOutcome,
) {
    if hit_test(bullet_pos, &player.position, HIT_RADIUS) {
        let _ = world.despawn(bullet);
        player.health = apply_damage(player.health, enemy_damage);
        outcome.events.push(GameEvent::PlayerHit {
            damage: enemy_damage,
            remaining_health: player.health,
        });
        if player.health == 0 {
            outcome.player_died = true;
        }
        return;
    }

    let hit = {
        let mut query = world.query::<(&UnitId, &Position, &AllyStatus)>();
        query
            .iter()
            .find(|(_, (_, pos, status))| {
                !status.downed && hit_test(bullet_pos, pos, ALLY_HIT_RADIUS)
            })
            .map(|(entity, (unit, _, _))| (entity, unit.id))
    };

    let Some((ally, ally_id)) = hit else {
        return;
    };

    let _ = world.despawn(bullet);

    let remaining = match world.get::<&mut Health>(ally) {
        Ok(mut health) => {
            health.current = apply_damage(health.current, enemy_damage);
            health.current
        }
        Err(_) => return,
    };

    if remaining == 0 {
        if let Ok(mut status) = world.get::<&mut AllyStatus>(ally) {
            status.downed = true;
            status.revive_progress = 0;
        }
        outcome.events.push(GameEvent::AllyDowned { ally_id });
    } else {
        outcome.events.push(GameEvent::AllyHit {
            ally_id,
            remaining_health: remaining,
        });
    }
}
