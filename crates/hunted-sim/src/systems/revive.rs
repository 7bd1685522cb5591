//! Downed hunters get back up after a living teammate stays close long
//! enough.

use hecs::{Entity, World};
use tracing::debug;

use hunted_core::actor::Actor;
use hunted_core::constants::{REVIVE_DURATION_SECS, REVIVE_REACH};
use hunted_core::enums::Team;
use hunted_core::events::GameEvent;
use hunted_core::types::Vec2;

use crate::components::actor_id;

pub fn run(world: &mut World, roster: &[Entity], events: &mut Vec<GameEvent>, dt: f64) {
    let helpers: Vec<(Vec2, f64)> = roster
        .iter()
        .filter_map(|&e| {
            let actor = world.get::<&Actor>(e).ok()?;
            (actor.alive && actor.team() == Team::Hunters).then_some((actor.position, actor.radius))
        })
        .collect();

    for &entity in roster {
        let Ok(mut actor) = world.get::<&mut Actor>(entity) else {
            continue;
        };
        if !actor.downed {
            continue;
        }
        let (position, radius) = (actor.position, actor.radius);
        let Some(hunter) = actor.as_hunter_mut() else {
            continue;
        };

        let attended = helpers
            .iter()
            .any(|(p, r)| position.distance(*p) - radius - r <= REVIVE_REACH);
        if !attended {
            hunter.revive_progress = 0.0;
            continue;
        }
        hunter.revive_progress += dt;
        if hunter.revive_progress >= REVIVE_DURATION_SECS {
            actor.revive();
            debug!(actor = ?actor_id(entity), "revived by teammate");
            events.push(GameEvent::Revived { actor: actor_id(entity) });
        }
    }
}
