//! TACTICAL OPS Tauri application.
//!
//! This crate wires the simulation crates to the frontend via Tauri IPC
//! commands and events.

pub mod game_loop;
pub mod ipc;
pub mod state;

pub use tacops_core as core;
