//! Game state snapshot — the complete visible state sent to the frontend
//! each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub difficulty: Difficulty,
    pub score: u32,
    pub wave: u32,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    /// Present only when the session was started with squad support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allies: Option<Vec<AllyView>>,
    /// Discrete events that occurred this tick.
    pub events: Vec<GameEvent>,
}

/// The player's HUD-visible state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub x: f32,
    pub y: f32,
    pub health: i32,
    pub max_health: i32,
    pub weapon: WeaponKind,
    pub ammo: u32,
    pub ammo_capacity: u32,
    pub reloading: bool,
    pub outfit: Option<OutfitKind>,
    /// Id of the ally being revived, if a revive is in progress.
    pub reviving: Option<u32>,
}

/// A visible enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub health: i32,
    pub max_health: i32,
    pub state: EnemyState,
    /// Heading in radians.
    pub facing: f32,
}

/// A bullet in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub friendly: bool,
}

/// A squad ally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllyView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub health: i32,
    pub max_health: i32,
    pub downed: bool,
    /// Revive progress in percent, 0-100.
    pub revive_progress: u32,
}
