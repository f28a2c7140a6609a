//! Discrete events emitted by the simulation for UI feedback.
//!
//! Events describe things that happened during a tick; continuous state
//! lives in the snapshot. The frontend uses these for effects the
//! snapshot diff can't express (kill flashes, hit markers, wave banners).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A wave of enemies entered the arena.
    WaveSpawned { wave: u32, enemy_count: u32 },
    /// An enemy was destroyed.
    EnemyKilled { enemy_id: u32, melee: bool },
    /// The player took a hit.
    PlayerHit { damage: i32, remaining_health: i32 },
    /// An ally took a hit but is still standing.
    AllyHit { ally_id: u32, remaining_health: i32 },
    /// An ally dropped to 0 health.
    AllyDowned { ally_id: u32 },
    /// A revive completed; the ally is back at full health.
    AllyRevived { ally_id: u32 },
    /// The last enemy of a wave was removed.
    WaveCleared { wave: u32 },
    /// Player health reached 0.
    GameOver { score: u32, wave: u32 },
    /// The final wave was cleared.
    Victory { score: u32, wave: u32 },
}
