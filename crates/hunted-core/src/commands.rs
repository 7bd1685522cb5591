//! Commands and input sent from the host application to the simulation.

use serde::{Deserialize, Serialize};

use crate::enums::AbilitySlot;
use crate::types::Vec2;

/// Normalized input from whatever capture layer the host uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerInput {
    /// Horizontal movement in [-1, 1].
    pub move_x: f64,
    /// Vertical movement in [-1, 1].
    pub move_y: f64,
    /// Aim point in world coordinates.
    pub aim: Vec2,
    /// Primary action held: fires the primary slot whenever it is ready.
    pub primary_held: bool,
    /// One-shot cast request, consumed by the next tick.
    #[serde(default)]
    pub cast: Option<AbilitySlot>,
    /// Jetpack boost held (hunters only).
    #[serde(default)]
    pub boost: bool,
}

impl PlayerInput {
    /// Movement vector with each axis clamped to [-1, 1] and NaN zeroed.
    pub fn movement(&self) -> Vec2 {
        let axis = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) };
        Vec2::new(axis(self.move_x), axis(self.move_y))
    }
}

/// Match lifecycle commands, processed at the next tick boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    /// Start the match if it has not started yet.
    Start,
    Pause,
    Resume,
    /// Abandon the match. Flips the running flag; nothing to drain.
    Cancel,
}
