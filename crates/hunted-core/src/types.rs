//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D world-space vector (world units, x = East, y = South on screen).
pub type Vec2 = glam::DVec2;

/// Stable handle to an actor in the simulation's entity table.
///
/// Holding an id never keeps an actor alive. Every use must go back through
/// the owning table, which reports a despawned id as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u64);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Angle of a vector in radians (atan2 convention, 0 = +x).
pub fn heading(v: Vec2) -> f64 {
    v.y.atan2(v.x)
}

/// Unit vector for an angle in radians.
pub fn from_heading(angle: f64) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Normalized direction from `from` to `to`, or +x when the points coincide.
pub fn direction(from: Vec2, to: Vec2) -> Vec2 {
    let delta = to - from;
    if delta.length_squared() > f64::EPSILON {
        delta.normalize()
    } else {
        Vec2::X
    }
}

/// Smallest signed difference between two angles, in (-PI, PI].
pub fn angle_between(a: f64, b: f64) -> f64 {
    let mut d = (b - a).rem_euclid(std::f64::consts::TAU);
    if d > std::f64::consts::PI {
        d -= std::f64::consts::TAU;
    }
    d
}
