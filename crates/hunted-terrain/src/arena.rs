//! ArenaMap: rectangular tiled arena with circular obstacles.

use serde::{Deserialize, Serialize};

use hunted_core::types::Vec2;

use crate::{Obstacle, ObstacleKind, SpawnSet, Terrain, TerrainKind};

/// Default tile edge length (world units).
pub const DEFAULT_TILE_SIZE: f64 = 60.0;

/// Rectangular arena. Tiles are stored row-major (top-to-bottom,
/// left-to-right); tile (0, 0) covers the map origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaMap {
    width: f64,
    height: f64,
    tile_size: f64,
    cols: usize,
    rows: usize,
    tiles: Vec<TerrainKind>,
    obstacles: Vec<Obstacle>,
    hunter_spawns: Vec<Vec2>,
    monster_spawns: Vec<Vec2>,
    wildlife_spawns: Vec<Vec2>,
}

impl ArenaMap {
    /// Open grass field with no obstacles and default spawn sets:
    /// hunters in the lower-left corner, the monster upper-right, wildlife
    /// on a coarse lattice across the middle.
    pub fn open(width: f64, height: f64) -> Self {
        let width = width.max(DEFAULT_TILE_SIZE);
        let height = height.max(DEFAULT_TILE_SIZE);
        let cols = (width / DEFAULT_TILE_SIZE).ceil() as usize;
        let rows = (height / DEFAULT_TILE_SIZE).ceil() as usize;

        let hunter_anchor = Vec2::new(width * 0.15, height * 0.85);
        let hunter_spawns = [(-40.0, 0.0), (40.0, 0.0), (0.0, -40.0), (0.0, 40.0)]
            .into_iter()
            .map(|(dx, dy)| hunter_anchor + Vec2::new(dx, dy))
            .collect();

        let mut wildlife_spawns = Vec::new();
        for row in 1..4 {
            for col in 1..5 {
                wildlife_spawns.push(Vec2::new(
                    width * f64::from(col) / 5.0,
                    height * f64::from(row) / 4.0,
                ));
            }
        }

        Self {
            width,
            height,
            tile_size: DEFAULT_TILE_SIZE,
            cols,
            rows,
            tiles: vec![TerrainKind::Grass; cols * rows],
            obstacles: Vec::new(),
            hunter_spawns,
            monster_spawns: vec![Vec2::new(width * 0.85, height * 0.15)],
            wildlife_spawns,
        }
    }

    /// Stock arena: open field plus a forest belt, a pond, a sand patch and
    /// a scattering of boulders and trees clear of every spawn point.
    pub fn standard(width: f64, height: f64) -> Self {
        let mut map = Self::open(width, height);
        let (w, h) = (map.width, map.height);

        map.paint(
            TerrainKind::Forest,
            Vec2::new(w * 0.40, 0.0),
            Vec2::new(w * 0.55, h * 0.35),
        );
        map.paint(
            TerrainKind::Water,
            Vec2::new(w * 0.45, h * 0.55),
            Vec2::new(w * 0.60, h * 0.70),
        );
        map.paint(
            TerrainKind::Sand,
            Vec2::new(w * 0.70, h * 0.60),
            Vec2::new(w * 0.90, h * 0.85),
        );

        let layout = [
            (0.30, 0.30, 40.0, ObstacleKind::Boulder),
            (0.50, 0.50, 55.0, ObstacleKind::Boulder),
            (0.68, 0.42, 35.0, ObstacleKind::Boulder),
            (0.30, 0.62, 25.0, ObstacleKind::Tree),
            (0.45, 0.15, 25.0, ObstacleKind::Tree),
            (0.52, 0.25, 25.0, ObstacleKind::Tree),
            (0.78, 0.70, 30.0, ObstacleKind::Pillar),
        ];
        for (fx, fy, radius, kind) in layout {
            map.obstacles
                .push(Obstacle::new(Vec2::new(w * fx, h * fy), radius, kind));
        }
        map.wildlife_spawns
            .retain(|p| !map.obstacles.iter().any(|o| o.overlaps(*p, 20.0)));
        map
    }

    /// Set every tile whose center lies inside the rectangle `[min, max]`.
    pub fn paint(&mut self, kind: TerrainKind, min: Vec2, max: Vec2) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let center = self.tile_center(row, col);
                if center.x >= min.x && center.x <= max.x && center.y >= min.y && center.y <= max.y
                {
                    self.tiles[row * self.cols + col] = kind;
                }
            }
        }
    }

    pub fn with_obstacle(mut self, obstacle: Obstacle) -> Self {
        self.obstacles.push(obstacle);
        self
    }

    /// Replace a spawn set.
    pub fn with_spawns(mut self, set: SpawnSet, points: Vec<Vec2>) -> Self {
        *self.spawns_mut(set) = points;
        self
    }

    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    /// Grid dimensions as (columns, rows).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    fn spawns_mut(&mut self, set: SpawnSet) -> &mut Vec<Vec2> {
        match set {
            SpawnSet::Hunters => &mut self.hunter_spawns,
            SpawnSet::Monster => &mut self.monster_spawns,
            SpawnSet::Wildlife => &mut self.wildlife_spawns,
        }
    }

    fn tile_center(&self, row: usize, col: usize) -> Vec2 {
        Vec2::new(
            (col as f64 + 0.5) * self.tile_size,
            (row as f64 + 0.5) * self.tile_size,
        )
    }

    /// Grid cell containing a point, clamped to the grid edges.
    fn cell_of(&self, point: Vec2) -> (usize, usize) {
        let clamp_index = |v: f64, len: usize| {
            if v.is_nan() || v < 0.0 {
                0
            } else {
                ((v / self.tile_size) as usize).min(len - 1)
            }
        };
        (clamp_index(point.y, self.rows), clamp_index(point.x, self.cols))
    }
}

impl Terrain for ArenaMap {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn tile_at(&self, point: Vec2) -> TerrainKind {
        let (row, col) = self.cell_of(point);
        self.tiles[row * self.cols + col]
    }

    fn tiles_of(&self, kind: TerrainKind) -> Vec<Vec2> {
        let mut centers = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.tiles[row * self.cols + col] == kind {
                    centers.push(self.tile_center(row, col));
                }
            }
        }
        centers
    }

    fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    fn spawn_points(&self, set: SpawnSet) -> &[Vec2] {
        match set {
            SpawnSet::Hunters => &self.hunter_spawns,
            SpawnSet::Monster => &self.monster_spawns,
            SpawnSet::Wildlife => &self.wildlife_spawns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_map_dimensions() {
        let map = ArenaMap::open(600.0, 300.0);
        assert_eq!(map.dimensions(), (10, 5));
        assert_eq!(map.tiles_of(TerrainKind::Grass).len(), 50);
        assert!(map.obstacles().is_empty());
        assert_eq!(map.spawn_points(SpawnSet::Hunters).len(), 4);
        assert_eq!(map.spawn_points(SpawnSet::Monster).len(), 1);
    }

    #[test]
    fn test_paint_and_tile_lookup() {
        let mut map = ArenaMap::open(600.0, 600.0);
        map.paint(
            TerrainKind::Water,
            Vec2::new(0.0, 0.0),
            Vec2::new(120.0, 120.0),
        );
        assert_eq!(map.tile_at(Vec2::new(10.0, 10.0)), TerrainKind::Water);
        assert_eq!(map.tile_at(Vec2::new(100.0, 100.0)), TerrainKind::Water);
        assert_eq!(map.tile_at(Vec2::new(300.0, 300.0)), TerrainKind::Grass);
        assert_eq!(map.tiles_of(TerrainKind::Water).len(), 4);
    }

    #[test]
    fn test_tile_lookup_off_map_clamps() {
        let mut map = ArenaMap::open(600.0, 600.0);
        map.paint(TerrainKind::Rock, Vec2::new(0.0, 0.0), Vec2::new(60.0, 60.0));
        assert_eq!(map.tile_at(Vec2::new(-500.0, -500.0)), TerrainKind::Rock);
        assert_eq!(map.tile_at(Vec2::new(f64::NAN, 0.0)), TerrainKind::Rock);
        assert_eq!(map.tile_at(Vec2::new(9000.0, 9000.0)), TerrainKind::Grass);
    }

    #[test]
    fn test_constrain_to_map() {
        let map = ArenaMap::open(1000.0, 800.0);
        assert_eq!(
            map.constrain_to_map(Vec2::new(-50.0, 900.0), 10.0),
            Vec2::new(10.0, 790.0)
        );
        assert_eq!(
            map.constrain_to_map(Vec2::new(500.0, 400.0), 10.0),
            Vec2::new(500.0, 400.0)
        );
    }

    #[test]
    fn test_obstacle_collision_first_in_order() {
        let map = ArenaMap::open(1000.0, 1000.0)
            .with_obstacle(Obstacle::new(Vec2::new(500.0, 500.0), 50.0, ObstacleKind::Boulder))
            .with_obstacle(Obstacle::new(Vec2::new(520.0, 500.0), 50.0, ObstacleKind::Tree));

        let hit = map.obstacle_collision(Vec2::new(510.0, 500.0), 5.0);
        assert_eq!(hit.map(|o| o.kind), Some(ObstacleKind::Boulder));

        // Touching exactly at the sum of radii is not a collision.
        assert!(map.obstacle_collision(Vec2::new(400.0, 500.0), 50.0).is_none());
    }

    #[test]
    fn test_standard_spawns_clear_of_obstacles() {
        let map = ArenaMap::standard(2400.0, 1800.0);
        assert!(!map.obstacles().is_empty());
        assert!(!map.tiles_of(TerrainKind::Water).is_empty());
        for set in [SpawnSet::Hunters, SpawnSet::Monster, SpawnSet::Wildlife] {
            for point in map.spawn_points(set) {
                assert!(
                    map.obstacle_collision(*point, 20.0).is_none(),
                    "{set:?} spawn {point:?} overlaps an obstacle"
                );
                assert!(map.in_bounds(*point));
            }
        }
    }

    #[test]
    fn test_with_spawns_replaces_set() {
        let map = ArenaMap::open(500.0, 500.0)
            .with_spawns(SpawnSet::Monster, vec![Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]);
        assert_eq!(map.spawn_points(SpawnSet::Monster).len(), 2);
    }
}
