//! Timed status effects (buffs and debuffs).

use serde::{Deserialize, Serialize};

use crate::enums::StatusId;

/// Numeric modifiers carried by a status effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Modifiers {
    pub speed_multiplier: f64,
    pub damage_multiplier: f64,
    /// Remaining absorb pool. Consumed by incoming damage before armor.
    pub shield: f64,
    pub immobilized: bool,
    pub invisible: bool,
}

impl Default for Modifiers {
    fn default() -> Self {
        Self {
            speed_multiplier: 1.0,
            damage_multiplier: 1.0,
            shield: 0.0,
            immobilized: false,
            invisible: false,
        }
    }
}

/// A timed modifier attached to an actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub id: StatusId,
    pub duration: f64,
    pub remaining: f64,
    pub modifiers: Modifiers,
}

impl StatusEffect {
    pub fn new(id: StatusId, duration: f64, modifiers: Modifiers) -> Self {
        Self {
            id,
            duration,
            remaining: duration,
            modifiers,
        }
    }

    pub fn shield(amount: f64, duration: f64) -> Self {
        Self::new(
            StatusId::Shield,
            duration,
            Modifiers {
                shield: amount,
                ..Modifiers::default()
            },
        )
    }

    pub fn immobilize(duration: f64) -> Self {
        Self::new(
            StatusId::Immobilize,
            duration,
            Modifiers {
                speed_multiplier: 0.0,
                immobilized: true,
                ..Modifiers::default()
            },
        )
    }

    pub fn slow(factor: f64, duration: f64) -> Self {
        Self::new(
            StatusId::Slow,
            duration,
            Modifiers {
                speed_multiplier: factor,
                ..Modifiers::default()
            },
        )
    }
}

/// Set of status effects keyed by id. Insertion order is kept so the
/// "first shield found" rule is stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectSet {
    entries: Vec<StatusEffect>,
}

impl EffectSet {
    /// Insert an effect, replacing any existing entry with the same id.
    /// The new entry starts with its full duration remaining.
    pub fn add(&mut self, mut effect: StatusEffect) {
        self.entries.retain(|e| e.id != effect.id);
        effect.remaining = effect.duration;
        self.entries.push(effect);
    }

    pub fn remove(&mut self, id: StatusId) -> Option<StatusEffect> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn contains(&self, id: StatusId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn get(&self, id: StatusId) -> Option<&StatusEffect> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Subtract `dt` from every entry and drop the ones at or below zero.
    pub fn tick(&mut self, dt: f64) {
        for effect in &mut self.entries {
            effect.remaining -= dt;
        }
        self.entries.retain(|e| e.remaining > 0.0);
    }

    /// First entry carrying a positive shield pool.
    pub fn first_shield_mut(&mut self) -> Option<&mut StatusEffect> {
        self.entries.iter_mut().find(|e| e.modifiers.shield > 0.0)
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.modifiers.speed_multiplier)
            .product()
    }

    pub fn damage_multiplier(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.modifiers.damage_multiplier)
            .product()
    }

    pub fn any_invisible(&self) -> bool {
        self.entries.iter().any(|e| e.modifiers.invisible)
    }

    pub fn any_immobilized(&self) -> bool {
        self.entries.iter().any(|e| e.modifiers.immobilized)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
