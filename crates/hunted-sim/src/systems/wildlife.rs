//! Wildlife behavior: flee anything dangerous nearby, otherwise wander.

use hecs::{Entity, World};
use rand::Rng;

use hunted_core::actor::{Actor, WildlifeBehavior};
use hunted_core::constants::{
    WILDLIFE_FLEE_RADIUS, WILDLIFE_WANDER_INTERVAL_SECS, WILDLIFE_WANDER_PACE,
};
use hunted_core::enums::Team;
use hunted_core::types::{direction, from_heading, ActorId, Vec2};

use crate::components::actor_id;

pub fn run<R: Rng + ?Sized>(world: &mut World, roster: &[Entity], rng: &mut R, dt: f64) {
    let threats: Vec<(ActorId, Vec2)> = roster
        .iter()
        .filter_map(|&e| {
            let actor = world.get::<&Actor>(e).ok()?;
            (actor.alive && actor.team() != Team::Wildlife).then(|| (actor_id(e), actor.position))
        })
        .collect();

    for &entity in roster {
        let Ok(mut actor) = world.get::<&mut Actor>(entity) else {
            continue;
        };
        if !actor.alive {
            continue;
        }
        let position = actor.position;
        let threat = nearest_within(&threats, position, WILDLIFE_FLEE_RADIUS);
        let Some(state) = actor.as_wildlife_mut() else {
            continue;
        };

        let velocity = match threat {
            Some((id, from)) => {
                state.behavior = WildlifeBehavior::Flee;
                state.flee_from = Some(id);
                direction(from, position)
            }
            None => {
                state.behavior = WildlifeBehavior::Wander;
                state.flee_from = None;
                state.wander_timer -= dt;
                if state.wander_timer <= 0.0 {
                    state.wander_timer = WILDLIFE_WANDER_INTERVAL_SECS;
                    state.wander_heading = rng.gen_range(0.0..std::f64::consts::TAU);
                }
                from_heading(state.wander_heading) * WILDLIFE_WANDER_PACE
            }
        };
        actor.velocity = velocity;
    }
}

/// Closest threat within `radius`. Ties go to the first in roster order.
fn nearest_within(threats: &[(ActorId, Vec2)], point: Vec2, radius: f64) -> Option<(ActorId, Vec2)> {
    let mut best: Option<(ActorId, Vec2, f64)> = None;
    for &(id, position) in threats {
        let d = point.distance(position);
        if d > radius {
            continue;
        }
        if best.map_or(true, |(_, _, best_d)| d < best_d) {
            best = Some((id, position, d));
        }
    }
    best.map(|(id, position, _)| (id, position))
}
