//! The mutator interface ability effects run against.
//!
//! Effects never reach into the simulation's storage directly. Everything
//! they read or change goes through [`CombatWorld`], which the simulation
//! implements over its entity table and hazard lists.

use hunted_core::ability::Ability;
use hunted_core::enums::{AbilitySlot, Team};
use hunted_core::events::GameEvent;
use hunted_core::hazards::{Dome, Explosion, Projectile, Trap};
use hunted_core::status::StatusEffect;
use hunted_core::types::{ActorId, Vec2};

/// Read-only copy of the fields an effect needs from an actor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Combatant {
    pub id: ActorId,
    pub team: Team,
    pub position: Vec2,
    pub radius: f64,
    pub facing: f64,
    pub alive: bool,
    pub downed: bool,
    /// Flat melee damage stat.
    pub damage: f64,
    pub damage_multiplier: f64,
}

impl Combatant {
    pub fn is_enemy_of(&self, other: &Combatant) -> bool {
        self.team != other.team
    }

    /// Distance between the two bodies' edges (negative when overlapping).
    pub fn gap_to(&self, other: &Combatant) -> f64 {
        self.position.distance(other.position) - self.radius - other.radius
    }
}

pub trait CombatWorld {
    fn combatant(&self, id: ActorId) -> Option<Combatant>;

    /// Every actor, dead or alive, in stable scan order.
    fn combatants(&self) -> Vec<Combatant>;

    /// Run the activation gate on `slot`: pay cost, start cooldown, strip
    /// stealth. `None` leaves the actor untouched.
    fn activate(&mut self, user: ActorId, slot: AbilitySlot) -> Option<Ability>;

    /// Clamp a body to the playable area.
    fn constrain(&self, point: Vec2, radius: f64) -> Vec2;

    /// Deal damage through shields and armor. Returns health removed.
    fn damage(&mut self, target: ActorId, amount: f64, source: Option<ActorId>) -> f64;

    /// Returns health restored.
    fn heal(&mut self, target: ActorId, amount: f64) -> f64;

    fn add_buff(&mut self, target: ActorId, effect: StatusEffect);

    fn add_debuff(&mut self, target: ActorId, effect: StatusEffect);

    /// Revive a downed actor. False when the actor is not downed.
    fn revive(&mut self, target: ActorId) -> bool;

    /// Move an actor to `to` (already constrained by the caller).
    fn displace(&mut self, target: ActorId, to: Vec2);

    fn spawn_projectile(&mut self, projectile: Projectile);

    /// Resolve an explosion immediately.
    fn spawn_explosion(&mut self, explosion: Explosion);

    fn spawn_trap(&mut self, trap: Trap);

    /// Replace the active dome, if any.
    fn spawn_dome(&mut self, dome: Dome);

    fn notify(&mut self, event: GameEvent);
}
