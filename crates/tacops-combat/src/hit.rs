//! Hit geometry: circle tests for projectiles, cone tests for melee.
//!
//! All comparisons are strict `<`: a target exactly on the radius or
//! exactly on the cone edge is a miss.

use std::f32::consts::{PI, TAU};

use tacops_core::catalog::WeaponProfile;
use tacops_core::constants::MELEE_CONE_HALF_ANGLE;
use tacops_core::types::Position;

/// Circle overlap test: true when the two points are closer than `radius`.
pub fn hit_test(a: &Position, b: &Position, radius: f32) -> bool {
    a.distance_to(b) < radius
}

/// Absolute angular difference between two bearings, normalized to [0, pi].
/// Bearings a hair either side of the ±pi seam compare as nearly equal.
pub fn angle_diff(a: f32, b: f32) -> f32 {
    let diff = (a - b).rem_euclid(TAU);
    if diff > PI { TAU - diff } else { diff }
}

/// Melee cone test: the target must be within the weapon's reach of the
/// origin and within the half-cone of the aim bearing.
pub fn melee_hit(origin: &Position, aim_bearing: f32, target: &Position, weapon: &WeaponProfile) -> bool {
    if origin.distance_to(target) >= weapon.range {
        return false;
    }
    angle_diff(aim_bearing, origin.bearing_to(target)) < MELEE_CONE_HALF_ANGLE
}
