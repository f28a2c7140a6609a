//! Combat resolution for TACTICAL OPS.
//!
//! Pure functions for damage computation and hit geometry. No ECS
//! dependency — operates on plain data so both the tick engine and tests
//! can call it directly.

pub mod damage;
pub mod hit;

pub use tacops_core as core;
