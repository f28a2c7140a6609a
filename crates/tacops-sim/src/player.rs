//! Player session state.
//!
//! The player is not an ECS entity: it never moves from its anchor at the
//! bottom-center of the arena, so its state lives directly on the engine.

use tacops_core::catalog::{outfit_profile, weapon_profile, WeaponProfile};
use tacops_core::constants::{PLAYER_BASE_HEALTH, PLAYER_X, PLAYER_Y};
use tacops_core::enums::{OutfitKind, WeaponKind};
use tacops_core::types::Position;

#[derive(Debug, Clone)]
pub struct PlayerState {
    pub position: Position,
    pub health: i32,
    pub max_health: i32,
    pub weapon: WeaponKind,
    pub ammo: u32,
    pub reloading: bool,
    /// Tick of the last shot with any weapon. `None` until the first shot.
    pub last_shot_tick: Option<u64>,
    /// Id of the ally currently being revived, if any.
    pub reviving: Option<u32>,
    pub outfit: Option<OutfitKind>,
}

impl PlayerState {
    /// Fresh player for a new session. The outfit's health bonus is baked
    /// into max health here and never changes afterwards.
    pub fn new(outfit: Option<OutfitKind>) -> Self {
        let max_health = PLAYER_BASE_HEALTH + outfit_profile(outfit).health_bonus;
        Self {
            position: Position::new(PLAYER_X, PLAYER_Y),
            health: max_health,
            max_health,
            weapon: WeaponKind::default(),
            ammo: weapon_profile(WeaponKind::default()).ammo_capacity,
            reloading: false,
            last_shot_tick: None,
            reviving: None,
            outfit,
        }
    }

    /// Tuning profile of the currently held weapon.
    pub fn weapon_profile(&self) -> WeaponProfile {
        weapon_profile(self.weapon)
    }

    /// Whether the fire cooldown has elapsed at `now`.
    pub fn shot_ready(&self, now: u64) -> bool {
        match self.last_shot_tick {
            None => true,
            Some(tick) => now.saturating_sub(tick) >= self.weapon_profile().fire_rate_ticks(),
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(None)
    }
}
