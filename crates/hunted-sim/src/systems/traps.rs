//! Trap system: single-use triggers for the monster team, fixed lifespan.

use tracing::debug;

use hunted_abilities::world::CombatWorld;
use hunted_core::enums::{Team, TrapKind};
use hunted_core::events::GameEvent;
use hunted_core::status::StatusEffect;

use crate::combat::Combat;

pub fn run(combat: &mut Combat, dt: f64) {
    let mut traps = std::mem::take(&mut combat.hazards.traps);

    for trap in traps.iter_mut() {
        let victim = combat.combatants().into_iter().find(|c| {
            c.alive
                && c.team == Team::Monster
                && c.position.distance(trap.position) <= trap.radius + c.radius
        });
        if let Some(victim) = victim {
            debug!(victim = ?victim.id, owner = ?trap.owner, kind = ?trap.kind, "trap sprung");
            trap.triggered = true;
            combat.damage(victim.id, trap.damage, Some(trap.owner));
            if trap.kind == TrapKind::Immobilize {
                combat.add_debuff(victim.id, StatusEffect::immobilize(trap.effect_duration));
            }
            combat.notify(GameEvent::TrapTriggered {
                position: trap.position,
                victim: victim.id,
            });
            continue;
        }
        trap.lifespan -= dt;
    }

    traps.retain(|t| !t.triggered && t.lifespan > 0.0);
    traps.append(&mut combat.hazards.traps);
    combat.hazards.traps = traps;
}
