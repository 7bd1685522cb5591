//! AI system: runs every controller against a fresh view of the world and
//! applies the resulting intents.
//!
//! Controllers run in roster order, one at a time, so a cast by an earlier
//! actor (a blink, a pull) is already visible to later ones.

use hecs::{Entity, World};
use rand::Rng;
use tracing::trace;

use hunted_abilities::dispatch::{is_supportive, use_ability};
use hunted_ai::context::{AbilityInfo, AiContext, Contact, SelfView};
use hunted_ai::fsm::{AiController, AiIntent};
use hunted_core::ability::EffectSpec;
use hunted_core::actor::Actor;
use hunted_core::types::Vec2;

use crate::combat::Combat;
use crate::components::actor_id;

pub fn run<R: Rng + ?Sized>(combat: &mut Combat, rng: &mut R, map_size: Vec2, dt: f64) {
    let roster = combat.roster;
    for &entity in roster {
        let Some(me) = self_view(combat.world, entity) else {
            continue;
        };
        let contacts = contacts(combat.world, roster, entity);
        let ctx = AiContext {
            me,
            contacts: &contacts,
            map_size,
            dt,
        };

        let intent = {
            let Ok(mut controller) = combat.world.get::<&mut AiController>(entity) else {
                continue;
            };
            let before = controller.state();
            let intent = controller.update(&ctx, rng);
            if controller.state() != before {
                trace!(
                    actor = ?ctx.me.id,
                    from = ?before,
                    to = ?controller.state(),
                    target = ?controller.target(),
                    "ai transition"
                );
            }
            intent
        };
        apply_intent(combat, entity, intent);
    }
}

/// View of a living actor. Dead and downed actors do not think.
fn self_view(world: &World, entity: Entity) -> Option<SelfView> {
    let actor = world.get::<&Actor>(entity).ok()?;
    if !actor.alive {
        return None;
    }
    let monster = actor.as_monster();
    Some(SelfView {
        id: actor_id(entity),
        team: actor.team(),
        position: actor.position,
        radius: actor.radius,
        health: actor.health,
        max_health: actor.max_health,
        evolution_stage: monster.map_or(1, |m| m.stage),
        evolution_fraction: monster.map_or(0.0, |m| m.evolution_fraction()),
        abilities: actor
            .abilities
            .iter()
            .map(|(slot, ability)| AbilityInfo {
                slot: *slot,
                range: ability.range,
                category: ability.category,
                supportive: is_supportive(&ability.effect),
                revives: matches!(ability.effect, EffectSpec::Revive { .. }),
                ready: ability.can_use(actor.energy),
            })
            .collect(),
    })
}

/// Everyone else, in roster order.
fn contacts(world: &World, roster: &[Entity], me: Entity) -> Vec<Contact> {
    roster
        .iter()
        .filter(|&&e| e != me)
        .filter_map(|&e| {
            let actor = world.get::<&Actor>(e).ok()?;
            Some(Contact {
                id: actor_id(e),
                team: actor.team(),
                position: actor.position,
                radius: actor.radius,
                health: actor.health,
                max_health: actor.max_health,
                alive: actor.alive,
                downed: actor.downed,
                invisible: actor.is_invisible(),
            })
        })
        .collect()
}

fn apply_intent(combat: &mut Combat, entity: Entity, intent: AiIntent) {
    {
        let Ok(mut actor) = combat.world.get::<&mut Actor>(entity) else {
            return;
        };
        actor.velocity = intent.move_dir;
        if let Some(facing) = intent.facing {
            actor.facing = facing;
        }
        if let Some(hunter) = actor.as_hunter_mut() {
            hunter.boosting = intent.boost;
        }
    }

    let id = actor_id(entity);
    for cast in intent.casts {
        use_ability(combat, id, cast.slot, cast.target, cast.aim);
    }
}
