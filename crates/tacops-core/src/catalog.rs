//! Static weapon, outfit, and difficulty catalogs.
//!
//! Catalog entries are immutable tuning data; they are produced by value
//! from a match and never mutated at runtime.

use crate::constants::ms_to_ticks;
use crate::enums::{Difficulty, OutfitKind, WeaponKind};

/// Ammo capacity sentinel for the knife (displayed as unlimited).
pub const KNIFE_AMMO_SENTINEL: u32 = 999;

/// Immutable weapon tuning data.
#[derive(Debug, Clone, Copy)]
pub struct WeaponProfile {
    pub kind: WeaponKind,
    /// Base damage per hit, before outfit bonuses.
    pub damage: i32,
    /// Minimum time between shots (ms).
    pub fire_rate_ms: u32,
    pub ammo_capacity: u32,
    /// Time to refill the magazine (ms). Zero for melee.
    pub reload_ms: u32,
    /// Melee reach in world units (also gates the aim point for the knife).
    pub range: f32,
    /// Random angular jitter applied to projectiles (radians).
    pub spread: f32,
    /// Projectile speed in world units per tick. Zero for melee.
    pub bullet_speed: f32,
}

impl WeaponProfile {
    pub fn is_melee(&self) -> bool {
        self.kind == WeaponKind::Knife
    }

    /// Fire cooldown in ticks.
    pub fn fire_rate_ticks(&self) -> u64 {
        ms_to_ticks(self.fire_rate_ms) as u64
    }

    /// Reload duration in ticks.
    pub fn reload_ticks(&self) -> u32 {
        ms_to_ticks(self.reload_ms)
    }
}

/// Get the tuning profile for a weapon.
pub fn weapon_profile(kind: WeaponKind) -> WeaponProfile {
    match kind {
        WeaponKind::Pistol => WeaponProfile {
            kind,
            damage: 50,
            fire_rate_ms: 500,
            ammo_capacity: 12,
            reload_ms: 1500,
            range: 400.0,
            spread: 0.05,
            bullet_speed: 10.0,
        },
        WeaponKind::Rifle => WeaponProfile {
            kind,
            damage: 35,
            fire_rate_ms: 150,
            ammo_capacity: 30,
            reload_ms: 2500,
            range: 600.0,
            spread: 0.12,
            bullet_speed: 12.0,
        },
        WeaponKind::Knife => WeaponProfile {
            kind,
            damage: 100,
            fire_rate_ms: 300,
            ammo_capacity: KNIFE_AMMO_SENTINEL,
            reload_ms: 0,
            range: 100.0,
            spread: 0.0,
            bullet_speed: 0.0,
        },
    }
}

/// Stat modifiers granted by an outfit for the whole session.
#[derive(Debug, Clone, Copy)]
pub struct OutfitProfile {
    /// Added to base max health at session start.
    pub health_bonus: i32,
    /// Percentage adjustment to all outgoing damage. May be negative.
    pub damage_bonus_pct: i32,
}

/// Get the stat profile for an outfit. `None` is the unmodified baseline.
pub fn outfit_profile(kind: Option<OutfitKind>) -> OutfitProfile {
    match kind {
        Some(OutfitKind::Soldier) => OutfitProfile {
            health_bonus: 50,
            damage_bonus_pct: 10,
        },
        Some(OutfitKind::Medic) => OutfitProfile {
            health_bonus: 25,
            damage_bonus_pct: -20,
        },
        Some(OutfitKind::Sniper) => OutfitProfile {
            health_bonus: 0,
            damage_bonus_pct: 40,
        },
        None => OutfitProfile {
            health_bonus: 0,
            damage_bonus_pct: 0,
        },
    }
}

/// Per-difficulty enemy tuning.
#[derive(Debug, Clone, Copy)]
pub struct DifficultyProfile {
    pub enemy_health: i32,
    /// Enemy movement speed, world units per tick.
    pub enemy_speed: f32,
    /// Damage dealt by an enemy bullet to the player or an ally.
    pub enemy_damage: i32,
    /// Base enemy count per wave (wave scaling is added on top).
    pub enemies_per_wave: u32,
}

/// Get the enemy tuning for a difficulty.
pub fn difficulty_profile(difficulty: Difficulty) -> DifficultyProfile {
    match difficulty {
        Difficulty::Easy => DifficultyProfile {
            enemy_health: 50,
            enemy_speed: 1.0,
            enemy_damage: 5,
            enemies_per_wave: 3,
        },
        Difficulty::Normal => DifficultyProfile {
            enemy_health: 100,
            enemy_speed: 1.5,
            enemy_damage: 10,
            enemies_per_wave: 5,
        },
        Difficulty::Hard => DifficultyProfile {
            enemy_health: 150,
            enemy_speed: 2.0,
            enemy_damage: 15,
            enemies_per_wave: 7,
        },
    }
}

/// Enemy count for a given wave number: base count plus one every two waves.
pub fn wave_enemy_count(difficulty: Difficulty, wave: u32) -> u32 {
    difficulty_profile(difficulty).enemies_per_wave + wave / 2
}
