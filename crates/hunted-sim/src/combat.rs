//! The simulation's [`CombatWorld`]: ability effects, projectiles, traps
//! and explosions all mutate actors through here, so damage accounting,
//! kill credit and feeding live in one place.

use hecs::{Entity, World};
use tracing::debug;

use hunted_abilities::world::{CombatWorld, Combatant};
use hunted_core::ability::Ability;
use hunted_core::actor::Actor;
use hunted_core::enums::{AbilitySlot, Team};
use hunted_core::events::GameEvent;
use hunted_core::hazards::{Dome, Explosion, Projectile, Trap};
use hunted_core::status::StatusEffect;
use hunted_core::types::{direction, ActorId, Vec2};
use hunted_terrain::Terrain;

use crate::components::{actor_id, entity_of, CombatStats};

/// Transient objects owned by the simulation alongside the actor table.
#[derive(Debug, Clone, Default)]
pub struct Hazards {
    pub projectiles: Vec<Projectile>,
    pub traps: Vec<Trap>,
    pub dome: Option<Dome>,
}

/// Borrowed view of the simulation state that systems and effects act on.
pub struct Combat<'a> {
    pub world: &'a mut World,
    /// Spawn order. Every scan that can tie walks this.
    pub roster: &'a [Entity],
    pub terrain: &'a dyn Terrain,
    pub hazards: &'a mut Hazards,
    pub events: &'a mut Vec<GameEvent>,
}

impl Combat<'_> {
    fn combatant_of(&self, entity: Entity) -> Option<Combatant> {
        let actor = self.world.get::<&Actor>(entity).ok()?;
        Some(Combatant {
            id: actor_id(entity),
            team: actor.team(),
            position: actor.position,
            radius: actor.radius,
            facing: actor.facing,
            alive: actor.alive,
            downed: actor.downed,
            damage: actor.damage,
            damage_multiplier: actor.damage_multiplier(),
        })
    }

    fn with_actor<R>(&mut self, id: ActorId, f: impl FnOnce(&mut Actor) -> R) -> Option<R> {
        let entity = entity_of(id)?;
        let mut actor = self.world.get::<&mut Actor>(entity).ok()?;
        Some(f(&mut actor))
    }

    fn with_stats(&mut self, id: ActorId, f: impl FnOnce(&mut CombatStats)) {
        if let Some(entity) = entity_of(id) {
            if let Ok(mut stats) = self.world.get::<&mut CombatStats>(entity) {
                f(&mut stats);
            }
        }
    }

    /// A monster ate `food_value` worth of wildlife.
    fn feed(&mut self, monster: ActorId, food_value: f64) {
        let Some((evolved, stage)) = self.with_actor(monster, |m| {
            let evolved = m.feed(food_value);
            (evolved, m.evolution_stage().unwrap_or(1))
        }) else {
            return;
        };
        self.with_stats(monster, |s| s.wildlife_eaten += 1);
        self.events.push(GameEvent::WildlifeEaten { monster, food_value });
        if evolved {
            debug!(actor = ?monster, stage, "monster evolved");
            self.events.push(GameEvent::Evolved { monster, stage });
        }
    }
}

impl CombatWorld for Combat<'_> {
    fn combatant(&self, id: ActorId) -> Option<Combatant> {
        self.combatant_of(entity_of(id)?)
    }

    fn combatants(&self) -> Vec<Combatant> {
        self.roster
            .iter()
            .filter_map(|&e| self.combatant_of(e))
            .collect()
    }

    fn activate(&mut self, user: ActorId, slot: AbilitySlot) -> Option<Ability> {
        let cast = self.with_actor(user, |a| a.try_activate(slot)).flatten()?;
        self.with_stats(user, |s| s.abilities_used += 1);
        Some(cast)
    }

    fn constrain(&self, point: Vec2, radius: f64) -> Vec2 {
        self.terrain.constrain_to_map(point, radius)
    }

    fn damage(&mut self, target: ActorId, amount: f64, source: Option<ActorId>) -> f64 {
        let Some((report, team, food)) = self.with_actor(target, |a| {
            let report = a.take_damage(amount);
            (report, a.team(), a.as_wildlife().map(|w| w.food_value))
        }) else {
            return 0.0;
        };
        if report.dealt <= 0.0 && report.absorbed <= 0.0 {
            return 0.0;
        }

        self.with_stats(target, |s| s.damage_taken += report.dealt);
        // Friendly fire hurts but earns nothing.
        let credited = source.filter(|s| {
            *s != target && self.combatant(*s).is_some_and(|c| c.team != team)
        });
        if let Some(source) = credited {
            self.with_stats(source, |s| s.damage_dealt += report.dealt);
        }
        self.events.push(GameEvent::Hit {
            target,
            source,
            amount: report.dealt,
            absorbed: report.absorbed,
        });

        if report.lethal {
            debug!(actor = ?target, by = ?source, ?team, "actor down");
            self.events.push(GameEvent::Downed { actor: target, by: source });
            match (team, source) {
                (Team::Hunters, _) => {
                    if let Some(source) = credited {
                        self.with_stats(source, |s| s.hunters_killed += 1);
                    }
                }
                (Team::Wildlife, Some(source)) => {
                    let by_monster = self
                        .combatant(source)
                        .is_some_and(|c| c.team == Team::Monster);
                    if let (true, Some(food)) = (by_monster, food) {
                        self.feed(source, food);
                    }
                }
                _ => {}
            }
        }
        report.dealt
    }

    fn heal(&mut self, target: ActorId, amount: f64) -> f64 {
        let restored = self.with_actor(target, |a| a.heal(amount)).unwrap_or(0.0);
        if restored > 0.0 {
            self.events.push(GameEvent::Healed { target, amount: restored });
        }
        restored
    }

    fn add_buff(&mut self, target: ActorId, effect: StatusEffect) {
        let status = effect.id;
        if self.with_actor(target, |a| a.add_buff(effect)).is_some() {
            self.events.push(GameEvent::StatusApplied { target, status, debuff: false });
        }
    }

    fn add_debuff(&mut self, target: ActorId, effect: StatusEffect) {
        let status = effect.id;
        if self.with_actor(target, |a| a.add_debuff(effect)).is_some() {
            self.events.push(GameEvent::StatusApplied { target, status, debuff: true });
        }
    }

    fn revive(&mut self, target: ActorId) -> bool {
        let revived = self
            .with_actor(target, |a| {
                if a.downed {
                    a.revive();
                    true
                } else {
                    false
                }
            })
            .unwrap_or(false);
        if revived {
            debug!(actor = ?target, "revived");
            self.events.push(GameEvent::Revived { actor: target });
        }
        revived
    }

    /// Forced moves respect an active dome like ordinary movement does.
    fn displace(&mut self, target: ActorId, to: Vec2) {
        let dome = self.hazards.dome;
        self.with_actor(target, |a| {
            a.position = match dome {
                Some(dome) if a.team() != Team::Wildlife => dome.clamp(to, a.radius),
                _ => to,
            };
        });
    }

    fn spawn_projectile(&mut self, projectile: Projectile) {
        self.hazards.projectiles.push(projectile);
    }

    /// Every living actor strictly inside the radius takes falloff-scaled
    /// damage and a radial shove scaled the same way.
    fn spawn_explosion(&mut self, explosion: Explosion) {
        self.events.push(GameEvent::Explosion {
            position: explosion.position,
            radius: explosion.radius,
        });
        for victim in self.combatants() {
            if !victim.alive {
                continue;
            }
            let falloff = explosion.falloff(explosion.position.distance(victim.position));
            if falloff <= 0.0 {
                continue;
            }
            self.damage(victim.id, explosion.damage * falloff, explosion.source);

            let shove = explosion.knockback * falloff;
            if shove <= 0.0 {
                continue;
            }
            if let Some(victim) = self.combatant(victim.id).filter(|c| c.alive) {
                let to = victim.position + direction(explosion.position, victim.position) * shove;
                let to = self.constrain(to, victim.radius);
                self.displace(victim.id, to);
            }
        }
    }

    fn spawn_trap(&mut self, trap: Trap) {
        self.events.push(GameEvent::TrapPlaced { position: trap.position });
        self.hazards.traps.push(trap);
    }

    fn spawn_dome(&mut self, dome: Dome) {
        debug!(owner = ?dome.owner, radius = dome.radius, "dome raised");
        self.events.push(GameEvent::DomeRaised {
            position: dome.position,
            radius: dome.radius,
        });
        self.hazards.dome = Some(dome);
    }

    fn notify(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
