//! Components attached alongside [`Actor`](hunted_core::actor::Actor) in
//! the hecs world, and the id <-> entity mapping.

use hecs::Entity;
use serde::Serialize;

use hunted_core::types::ActorId;

/// Marks the actor driven by [`PlayerInput`](hunted_core::commands::PlayerInput).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerControlled;

/// Running totals for one actor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CombatStats {
    pub damage_dealt: f64,
    pub damage_taken: f64,
    pub abilities_used: u32,
    /// Hunters this actor brought to zero health.
    pub hunters_killed: u32,
    pub wildlife_eaten: u32,
}

pub fn actor_id(entity: Entity) -> ActorId {
    ActorId(entity.to_bits().get())
}

/// `None` for bits that never named an entity. A despawned entity still
/// decodes; the world lookup is what rejects it.
pub fn entity_of(id: ActorId) -> Option<Entity> {
    Entity::from_bits(id.0)
}
