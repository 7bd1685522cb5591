//! Snapshot system: read-only views of the world for collaborators.

use hecs::{Entity, World};

use hunted_ai::fsm::AiController;
use hunted_core::actor::Actor;
use hunted_core::enums::MatchPhase;
use hunted_core::events::GameEvent;
use hunted_core::state::*;
use hunted_core::status::EffectSet;
use hunted_core::types::SimTime;

use crate::combat::Hazards;
use crate::components::{actor_id, PlayerControlled};

pub fn build_snapshot(
    world: &World,
    roster: &[Entity],
    hazards: &Hazards,
    time: SimTime,
    phase: MatchPhase,
    time_remaining: f64,
    events: Vec<GameEvent>,
) -> FrameSnapshot {
    FrameSnapshot {
        time,
        phase,
        time_remaining,
        actors: roster
            .iter()
            .filter_map(|&e| build_actor(world, e))
            .collect(),
        projectiles: hazards
            .projectiles
            .iter()
            .map(|p| ProjectileView {
                position: p.position,
                size: p.size,
                color: p.color,
                owner_team: p.owner_team,
            })
            .collect(),
        traps: hazards
            .traps
            .iter()
            .map(|t| TrapView {
                position: t.position,
                radius: t.radius,
                lifespan: t.lifespan,
            })
            .collect(),
        dome: hazards.dome,
        events,
    }
}

fn build_actor(world: &World, entity: Entity) -> Option<ActorView> {
    let actor = world.get::<&Actor>(entity).ok()?;
    let ai_state = world.get::<&AiController>(entity).ok().map(|ai| ai.state());
    let monster = actor.as_monster();
    Some(ActorView {
        id: actor_id(entity),
        name: actor.name.clone(),
        team: actor.team(),
        position: actor.position,
        facing: actor.facing,
        radius: actor.radius,
        health: actor.health,
        max_health: actor.max_health,
        energy: actor.energy,
        max_energy: actor.max_energy,
        alive: actor.alive,
        downed: actor.downed,
        evolution_stage: monster.map(|m| m.stage),
        evolution_fraction: monster.map(|m| m.evolution_fraction()),
        jetpack_fuel: actor.as_hunter().map(|h| h.jetpack_fuel),
        ai_state,
        player_controlled: world.get::<&PlayerControlled>(entity).is_ok(),
        buffs: statuses(&actor.buffs),
        debuffs: statuses(&actor.debuffs),
        abilities: actor
            .abilities
            .iter()
            .map(|(slot, a)| AbilityView {
                slot: *slot,
                id: a.id,
                level: a.level,
                cooldown_remaining: a.current_cooldown,
                ready: a.can_use(actor.energy),
            })
            .collect(),
    })
}

fn statuses(set: &EffectSet) -> Vec<StatusView> {
    set.iter()
        .map(|s| StatusView {
            id: s.id,
            remaining: s.remaining,
        })
        .collect()
}
