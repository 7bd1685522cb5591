//! AI controllers for Hunted.
//!
//! Finite state machines for the monster and the four hunter roles, plus
//! difficulty presets. Pure logic over plain data: no entity storage, no
//! world access.

pub mod context;
pub mod fsm;
pub mod hunter;
pub mod monster;
pub mod profiles;

pub use hunted_core as core;

pub use context::{AbilityInfo, AiContext, Contact, SelfView};
pub use fsm::{AiController, AiIntent, CastOrder, Decision};
pub use profiles::{Brain, DifficultyProfile};

#[cfg(test)]
mod tests;
