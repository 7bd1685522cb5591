//! Plain-data view of the world handed to a controller each tick.

use hunted_core::constants::STEALTH_REVEAL_RADIUS;
use hunted_core::enums::{AbilityCategory, AbilitySlot, Team};
use hunted_core::types::{ActorId, Vec2};

/// Another actor as the controller sees it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub id: ActorId,
    pub team: Team,
    pub position: Vec2,
    pub radius: f64,
    pub health: f64,
    pub max_health: f64,
    pub alive: bool,
    pub downed: bool,
    pub invisible: bool,
}

impl Contact {
    pub fn health_fraction(&self) -> f64 {
        if self.max_health > 0.0 {
            self.health / self.max_health
        } else {
            0.0
        }
    }
}

/// One of the controlled actor's abilities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbilityInfo {
    pub slot: AbilitySlot,
    pub range: f64,
    pub category: AbilityCategory,
    /// Meant for teammates (heals, ally buffs, revives).
    pub supportive: bool,
    /// Raises downed teammates.
    pub revives: bool,
    /// Off cooldown and affordable right now.
    pub ready: bool,
}

/// The controlled actor.
#[derive(Debug, Clone, PartialEq)]
pub struct SelfView {
    pub id: ActorId,
    pub team: Team,
    pub position: Vec2,
    pub radius: f64,
    pub health: f64,
    pub max_health: f64,
    /// Monster evolution stage; 1 for everyone else.
    pub evolution_stage: u8,
    /// Progress toward the next stage in [0, 1].
    pub evolution_fraction: f64,
    pub abilities: Vec<AbilityInfo>,
}

impl SelfView {
    pub fn health_fraction(&self) -> f64 {
        if self.max_health > 0.0 {
            self.health / self.max_health
        } else {
            0.0
        }
    }

    pub fn ability(&self, slot: AbilitySlot) -> Option<&AbilityInfo> {
        self.abilities.iter().find(|a| a.slot == slot)
    }
}

pub struct AiContext<'a> {
    pub me: SelfView,
    /// Every other actor in the simulation's scan order.
    pub contacts: &'a [Contact],
    /// Map width and height.
    pub map_size: Vec2,
    pub dt: f64,
}

impl AiContext<'_> {
    pub fn contact(&self, id: ActorId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Teammates are always perceived. Others only when not invisible, or
    /// when close enough to see through stealth.
    pub fn perceives(&self, contact: &Contact) -> bool {
        contact.team == self.me.team
            || !contact.invisible
            || self.me.position.distance(contact.position) <= STEALTH_REVEAL_RADIUS
    }

    /// Nearest living, perceived contact of `team`. Ties go to the first
    /// contact in scan order.
    pub fn nearest(&self, team: Team) -> Option<(&Contact, f64)> {
        let mut best: Option<(&Contact, f64)> = None;
        for contact in self.contacts {
            if contact.id == self.me.id
                || contact.team != team
                || !contact.alive
                || !self.perceives(contact)
            {
                continue;
            }
            let d = self.me.position.distance(contact.position);
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((contact, d));
            }
        }
        best
    }

    /// Living teammate (self excluded) with the lowest health fraction
    /// strictly below `threshold`. Ties go to the first found.
    pub fn most_injured_ally(&self, threshold: f64) -> Option<&Contact> {
        let mut best: Option<&Contact> = None;
        for contact in self.contacts {
            if contact.id == self.me.id
                || contact.team != self.me.team
                || !contact.alive
                || contact.health_fraction() >= threshold
            {
                continue;
            }
            if best.is_none_or(|b| contact.health_fraction() < b.health_fraction()) {
                best = Some(contact);
            }
        }
        best
    }

    /// First downed teammate in scan order.
    pub fn downed_ally(&self) -> Option<&Contact> {
        self.contacts
            .iter()
            .find(|c| c.id != self.me.id && c.team == self.me.team && c.downed)
    }
}
