//! Damage math.

use tacops_core::catalog::{OutfitProfile, WeaponProfile};

/// Damage a weapon deals with an outfit's bonus applied:
/// `round(damage * (1 + bonus/100))`, never negative.
///
/// The bonus may be negative (medic), so the result is clamped at 0.
pub fn computed_damage(weapon: &WeaponProfile, outfit: &OutfitProfile) -> i32 {
    let scaled = weapon.damage as f32 * (1.0 + outfit.damage_bonus_pct as f32 / 100.0);
    (scaled.round() as i32).max(0)
}

/// Apply `damage` to a health pool, clamping at 0.
/// Returns the new current health.
pub fn apply_damage(current: i32, damage: i32) -> i32 {
    (current - damage).max(0)
}
