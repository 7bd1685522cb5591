//! Per-tick systems, run by the engine in a fixed order.
//!
//! Systems are free functions over the hecs world (usually through
//! [`Combat`](crate::combat::Combat)). They do not own state.

pub mod ai;
pub mod cleanup;
pub mod constraints;
pub mod dome;
pub mod input;
pub mod movement;
pub mod projectiles;
pub mod revive;
pub mod separation;
pub mod snapshot;
pub mod traps;
pub mod wildlife;
pub mod win;
