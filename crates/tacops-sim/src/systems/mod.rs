//! Simulation systems, run in a fixed order each tick:
//! bullet movement, enemy AI, collision resolution, snapshot.

pub mod collision;
pub mod enemy_ai;
pub mod movement;
pub mod snapshot;
