//! Ability catalog and effect dispatch for Hunted.
//!
//! [`catalog`] holds the immutable template table, [`world`] the mutator
//! trait effects are written against, and [`dispatch`] the one interpreter
//! that turns an [`EffectSpec`](hunted_core::ability::EffectSpec) into world
//! mutations.

pub use hunted_core as core;

pub mod catalog;
pub mod dispatch;
pub mod world;

pub use catalog::{AbilityCatalog, Archetype};
pub use dispatch::{apply_effect, is_supportive, use_ability};
pub use world::{CombatWorld, Combatant};

#[cfg(test)]
mod tests;
