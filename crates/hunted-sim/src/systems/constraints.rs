//! Spatial constraint system: map bounds, obstacle push-out, dome clamp.

use hecs::World;

use hunted_core::actor::Actor;
use hunted_core::enums::Team;
use hunted_core::hazards::Dome;
use hunted_core::types::{direction, from_heading, heading};
use hunted_terrain::Terrain;

/// Keep every actor inside the map and out of obstacles. While a dome is
/// up, everyone except wildlife is also held inside it.
pub fn run(world: &mut World, terrain: &dyn Terrain, dome: Option<&Dome>) {
    for (_entity, actor) in world.query_mut::<&mut Actor>() {
        let radius = actor.radius;
        let mut position = terrain.constrain_to_map(actor.position, radius);

        if let Some(obstacle) = terrain.obstacle_collision(position, radius) {
            let angle = heading(direction(obstacle.position, position));
            position = obstacle.position + from_heading(angle) * (obstacle.radius + radius);
        }

        if let Some(dome) = dome {
            if actor.team() != Team::Wildlife {
                position = dome.clamp(position, radius);
            }
        }
        actor.position = position;
    }
}
