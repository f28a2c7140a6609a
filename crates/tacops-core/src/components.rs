//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyState;

/// Stable identifier for snapshot keying. Assigned monotonically by the
/// engine and never reused within a session, independent of hecs handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitId {
    pub id: u32,
}

/// Hit points. `current` is clamped to [0, max] by the systems that
/// modify it; an entity at 0 is removed (enemy) or downed (ally).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

/// Enemy behavior state. Doubles as the enemy marker component.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyBrain {
    pub state: EnemyState,
    /// Current heading in radians.
    pub facing: f32,
    /// Movement speed in world units per tick (from the difficulty table).
    pub speed: f32,
    /// Tick of the last shot. `None` until the first shot, so a fresh
    /// enemy entering attack range may fire immediately.
    pub last_shot_tick: Option<u64>,
}

/// Ally lifecycle. Doubles as the ally marker component.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AllyStatus {
    pub downed: bool,
    /// Revive progress in percent, 0-100. Reset to 0 when downed.
    pub revive_progress: u32,
}

/// Projectile marker. `friendly` decides which side it can damage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub friendly: bool,
}
