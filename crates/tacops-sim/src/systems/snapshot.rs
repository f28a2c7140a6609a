//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot. Read-only — never modifies the world.

use hecs::World;

use tacops_core::components::*;
use tacops_core::enums::{Difficulty, GamePhase};
use tacops_core::events::GameEvent;
use tacops_core::state::*;
use tacops_core::types::{Position, SimTime, Velocity};

use crate::player::PlayerState;

/// Build a complete snapshot of the current state.
pub fn build(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    difficulty: Difficulty,
    score: u32,
    wave: u32,
    player: &PlayerState,
    squad: bool,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        difficulty,
        score,
        wave,
        player: build_player(player),
        enemies: build_enemies(world),
        bullets: build_bullets(world),
        allies: squad.then(|| build_allies(world)),
        events,
    }
}

fn build_player(player: &PlayerState) -> PlayerView {
    PlayerView {
        x: player.position.x,
        y: player.position.y,
        health: player.health,
        max_health: player.max_health,
        weapon: player.weapon,
        ammo: player.ammo,
        ammo_capacity: player.weapon_profile().ammo_capacity,
        reloading: player.reloading,
        outfit: player.outfit,
        reviving: player.reviving,
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&UnitId, &Position, &Health, &EnemyBrain)>()
        .iter()
        .map(|(_, (unit, pos, health, brain))| EnemyView {
            id: unit.id,
            x: pos.x,
            y: pos.y,
            health: health.current,
            max_health: health.max,
            state: brain.state,
            facing: brain.facing,
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    let mut bullets: Vec<BulletView> = world
        .query::<(&UnitId, &Position, &Velocity, &Projectile)>()
        .iter()
        .map(|(_, (unit, pos, vel, proj))| BulletView {
            id: unit.id,
            x: pos.x,
            y: pos.y,
            vx: vel.x,
            vy: vel.y,
            friendly: proj.friendly,
        })
        .collect();

    bullets.sort_by_key(|b| b.id);
    bullets
}

fn build_allies(world: &World) -> Vec<AllyView> {
    let mut allies: Vec<AllyView> = world
        .query::<(&UnitId, &Position, &Health, &AllyStatus)>()
        .iter()
        .map(|(_, (unit, pos, health, status))| AllyView {
            id: unit.id,
            x: pos.x,
            y: pos.y,
            health: health.current,
            max_health: health.max,
            downed: status.downed,
            revive_progress: status.revive_progress,
        })
        .collect();

    allies.sort_by_key(|a| a.id);
    allies
}
