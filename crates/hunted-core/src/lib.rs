//! Core types and definitions for the Hunted simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! the actor model and status effects, ability runtime types, hazards,
//! commands, snapshots, events, and constants. It has no dependency on the
//! entity storage or any runtime framework.

pub mod ability;
pub mod actor;
pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod hazards;
pub mod state;
pub mod status;
pub mod types;
