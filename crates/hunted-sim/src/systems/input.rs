//! Player input system: applies the host's input to the player actor.

use hunted_abilities::dispatch::use_ability;
use hunted_core::actor::Actor;
use hunted_core::commands::PlayerInput;
use hunted_core::enums::AbilitySlot;
use hunted_core::types::{direction, heading, Vec2};

use crate::combat::Combat;
use crate::components::{actor_id, PlayerControlled};

/// Set movement, facing and boost, then attempt the requested casts.
/// A dead player actor stands still and casts nothing.
pub fn run(combat: &mut Combat, input: &PlayerInput) {
    let player = combat
        .world
        .query::<(&PlayerControlled, &Actor)>()
        .iter()
        .next()
        .map(|(entity, _)| entity);
    let Some(entity) = player else {
        return;
    };

    let alive = {
        let Ok(mut actor) = combat.world.get::<&mut Actor>(entity) else {
            return;
        };
        if actor.alive {
            actor.velocity = input.movement();
            let to_aim = input.aim - actor.position;
            if to_aim.length_squared() > f64::EPSILON {
                actor.facing = heading(direction(actor.position, input.aim));
            }
            if let Some(hunter) = actor.as_hunter_mut() {
                hunter.boosting = input.boost;
            }
        } else {
            actor.velocity = Vec2::ZERO;
        }
        actor.alive
    };
    if !alive {
        return;
    }

    let id = actor_id(entity);
    if input.primary_held {
        use_ability(combat, id, AbilitySlot::Primary, None, input.aim);
    }
    if let Some(slot) = input.cast {
        use_ability(combat, id, slot, None, input.aim);
    }
}
