//! Simulation engine for Hunted.
//!
//! Owns the hecs world holding every actor, runs the ordered per-tick
//! systems, and produces `FrameSnapshot`s and the end-of-match summary.

pub mod combat;
pub mod components;
pub mod config;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use hunted_core as core;
pub use config::{ConfigError, MatchConfig, PlayerSlot};
pub use engine::Simulation;
