//! Player commands sent from the frontend to the simulation.
//!
//! Commands are validated and queued for processing at the next tick
//! boundary. Invalid commands are rejected as policy no-ops, never errors
//! (see `errors::Rejection`).

use serde::{Deserialize, Serialize};

use crate::enums::{Difficulty, OutfitKind, WeaponKind};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a session from the menu.
    StartGame {
        difficulty: Difficulty,
        /// Optional stat-modifying outfit; `None` is the plain loadout.
        #[serde(default)]
        outfit: Option<OutfitKind>,
        /// Whether revivable allies accompany the player this session.
        #[serde(default)]
        squad: bool,
    },
    /// Fire the current weapon at a point in world space.
    FireAt { x: f32, y: f32 },
    /// Begin reloading the current weapon.
    Reload,
    /// Swap to another weapon. Refills its magazine instantly.
    SwitchWeapon { weapon: WeaponKind },
    /// Begin reviving a downed ally.
    StartRevive { ally_id: u32 },
    /// Abandon the session (or leave the end screen) and return to menu.
    ReturnToMenu,
}
