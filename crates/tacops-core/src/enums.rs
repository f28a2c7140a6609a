//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level session state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    GameOver,
    Victory,
}

/// Session difficulty. Fixes enemy health, speed, damage, and wave size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

/// Weapon slot. Pistol and rifle fire projectiles; the knife is melee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    #[default]
    Pistol,
    Rifle,
    Knife,
}

/// Cosmetic outfit chosen before a session; shifts max health and damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutfitKind {
    Soldier,
    Medic,
    Sniper,
}

/// Enemy behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyState {
    /// Wandering the arena, occasionally picking a new heading.
    #[default]
    Patrol,
    /// Close enough to be wary: holds course, holds fire.
    Cover,
    /// In range: aims at the player every tick and fires when able.
    Attack,
}
