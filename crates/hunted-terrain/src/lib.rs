//! Map queries for Hunted.
//!
//! The simulation only ever talks to a map through the [`Terrain`] trait:
//! bounds, tile lookup, obstacles, spawn sets, and the two spatial helpers
//! used by the constraint pass. [`ArenaMap`] is the stock rectangular
//! implementation used by headless matches and tests.

pub use hunted_core as core;

pub mod arena;

pub use arena::ArenaMap;

use serde::{Deserialize, Serialize};

use hunted_core::types::Vec2;

/// Ground type of a map tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerrainKind {
    #[default]
    Grass,
    Forest,
    Sand,
    Water,
    Rock,
}

/// Kind of a circular obstacle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObstacleKind {
    #[default]
    Boulder,
    Tree,
    Pillar,
}

/// Solid circle that blocks movement and projectiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub position: Vec2,
    pub radius: f64,
    #[serde(default)]
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn new(position: Vec2, radius: f64, kind: ObstacleKind) -> Self {
        Self {
            position,
            radius,
            kind,
        }
    }

    /// True when a circle of `radius` at `point` overlaps this obstacle.
    pub fn overlaps(&self, point: Vec2, radius: f64) -> bool {
        point.distance(self.position) < self.radius + radius
    }
}

/// Named spawn-point set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpawnSet {
    Hunters,
    Monster,
    Wildlife,
}

/// Query interface the simulation consumes.
pub trait Terrain {
    /// Map width in world units.
    fn width(&self) -> f64;

    /// Map height in world units.
    fn height(&self) -> f64;

    /// Ground type under a point. Points off the map report the nearest edge tile.
    fn tile_at(&self, point: Vec2) -> TerrainKind;

    /// Centers of every tile of the given kind, in row-major order.
    fn tiles_of(&self, kind: TerrainKind) -> Vec<Vec2>;

    fn obstacles(&self) -> &[Obstacle];

    fn spawn_points(&self, set: SpawnSet) -> &[Vec2];

    /// Clamp a body of `radius` so it lies fully inside the map.
    fn constrain_to_map(&self, point: Vec2, radius: f64) -> Vec2 {
        let max_x = (self.width() - radius).max(radius);
        let max_y = (self.height() - radius).max(radius);
        Vec2::new(point.x.clamp(radius, max_x), point.y.clamp(radius, max_y))
    }

    /// First obstacle overlapping a body of `radius` at `point`, in list order.
    fn obstacle_collision(&self, point: Vec2, radius: f64) -> Option<&Obstacle> {
        self.obstacles().iter().find(|o| o.overlaps(point, radius))
    }

    /// Whether a point lies inside the map rectangle.
    fn in_bounds(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.y >= 0.0 && point.x <= self.width() && point.y <= self.height()
    }
}
