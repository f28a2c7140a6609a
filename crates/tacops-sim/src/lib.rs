//! Simulation engine for TACTICAL OPS.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate, advances
//! pending timed actions, and produces GameStateSnapshots for the
//! frontend. Completely headless — no Tauri dependency.

pub mod engine;
pub mod player;
pub mod systems;
pub mod timers;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use tacops_core as core;
