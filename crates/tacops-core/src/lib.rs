//! Core types and definitions for the TACTICAL OPS simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, the weapon/outfit/difficulty catalog, state
//! snapshots, events, and constants. It has no dependency on Tauri or
//! any runtime framework.

pub mod catalog;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
