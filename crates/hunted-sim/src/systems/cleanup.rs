//! Cleanup: dead wildlife leaves the world, and fresh wildlife trickles
//! back in on a fixed interval up to the starting population.

use hecs::{Entity, World};
use rand::Rng;
use tracing::trace;

use hunted_core::actor::Actor;
use hunted_core::enums::Team;
use hunted_terrain::{SpawnSet, Terrain};

use crate::world_setup;

/// Wildlife respawn timer.
#[derive(Debug, Clone, Copy)]
pub struct RespawnClock {
    pub interval: f64,
    pub elapsed: f64,
    /// Population to top back up to.
    pub population: usize,
}

impl RespawnClock {
    pub fn new(interval: f64, population: usize) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            population,
        }
    }
}

/// Despawn dead wildlife and drop it from the roster. Hunters and the
/// monster stay in the world when down.
pub fn run(world: &mut World, roster: &mut Vec<Entity>, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, actor) in world.query_mut::<&Actor>() {
        if !actor.alive && actor.team() == Team::Wildlife {
            despawn_buffer.push(entity);
        }
    }
    if despawn_buffer.is_empty() {
        return;
    }

    roster.retain(|e| !despawn_buffer.contains(e));
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Spawn at most one animal per elapsed interval.
pub fn respawn<R: Rng + ?Sized>(
    world: &mut World,
    roster: &mut Vec<Entity>,
    terrain: &dyn Terrain,
    rng: &mut R,
    clock: &mut RespawnClock,
    dt: f64,
) {
    clock.elapsed += dt;
    if clock.elapsed < clock.interval {
        return;
    }
    clock.elapsed = 0.0;

    let living = roster
        .iter()
        .filter(|&&e| {
            world
                .get::<&Actor>(e)
                .is_ok_and(|a| a.alive && a.team() == Team::Wildlife)
        })
        .count();
    if living >= clock.population {
        return;
    }

    let spawns = terrain.spawn_points(SpawnSet::Wildlife);
    let position = if spawns.is_empty() {
        world_setup::random_point(terrain, rng)
    } else {
        spawns[rng.gen_range(0..spawns.len())]
    };
    let species = world_setup::random_species(rng);
    trace!(?species, x = position.x, y = position.y, "wildlife respawned");
    world_setup::spawn_wildlife(world, roster, species, position);
}
