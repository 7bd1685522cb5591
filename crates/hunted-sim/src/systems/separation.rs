//! Overlap resolution: living actors that intersect are pushed apart
//! symmetrically. No damage. Results are held to the map and, for
//! everyone but wildlife, to an active dome.

use hecs::{Entity, World};

use hunted_core::actor::Actor;
use hunted_core::enums::Team;
use hunted_core::hazards::Dome;
use hunted_core::types::{direction, Vec2};
use hunted_terrain::Terrain;

pub fn run(world: &mut World, roster: &[Entity], terrain: &dyn Terrain, dome: Option<&Dome>) {
    let mut bodies: Vec<(Entity, Vec2, f64)> = roster
        .iter()
        .filter_map(|&e| {
            let actor = world.get::<&Actor>(e).ok()?;
            actor.alive.then_some((e, actor.position, actor.radius))
        })
        .collect();

    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (_, a, ra) = bodies[i];
            let (_, b, rb) = bodies[j];
            let overlap = ra + rb - a.distance(b);
            if overlap <= 0.0 {
                continue;
            }
            let push = direction(a, b) * (overlap / 2.0);
            bodies[i].1 = a - push;
            bodies[j].1 = b + push;
        }
    }

    for (entity, position, radius) in bodies {
        if let Ok(mut actor) = world.get::<&mut Actor>(entity) {
            let mut position = terrain.constrain_to_map(position, radius);
            if let Some(dome) = dome.filter(|_| actor.team() != Team::Wildlife) {
                position = dome.clamp(position, radius);
            }
            actor.position = position;
        }
    }
}
