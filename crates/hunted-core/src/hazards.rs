//! Transient world objects owned by the simulation: projectiles, traps,
//! the dome, and explosions.

use serde::Serialize;

use crate::constants::TRAP_LIFESPAN_SECS;
use crate::enums::{Team, TrapKind};
use crate::status::StatusEffect;
use crate::types::{ActorId, Vec2};

/// Extra effect a projectile applies to whatever it hits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum OnHit {
    Debuff(StatusEffect),
    /// Drag the struck actor toward the projectile owner.
    Pull(f64),
    /// Shove the struck actor along the projectile's travel direction.
    Knockback(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projectile {
    pub position: Vec2,
    pub velocity: Vec2,
    pub damage: f64,
    pub owner: ActorId,
    pub owner_team: Team,
    pub size: f64,
    pub color: &'static str,
    pub life: f64,
    pub explosion_radius: Option<f64>,
    pub on_hit: Option<OnHit>,
}

impl Projectile {
    pub fn is_explosive(&self) -> bool {
        self.explosion_radius.is_some_and(|r| r > 0.0)
    }

    /// Explosion this projectile produces on detonation, if explosive.
    pub fn detonation(&self) -> Option<Explosion> {
        if !self.is_explosive() {
            return None;
        }
        let radius = self.explosion_radius?;
        Some(Explosion {
            position: self.position,
            radius,
            damage: self.damage,
            knockback: radius * 0.5,
            source: Some(self.owner),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trap {
    pub position: Vec2,
    pub radius: f64,
    pub damage: f64,
    /// Duration of the debuff applied on trigger (seconds).
    pub effect_duration: f64,
    pub kind: TrapKind,
    pub triggered: bool,
    /// Seconds left before the trap expires untriggered.
    pub lifespan: f64,
    pub owner: ActorId,
}

impl Trap {
    pub fn new(
        position: Vec2,
        radius: f64,
        damage: f64,
        effect_duration: f64,
        kind: TrapKind,
        owner: ActorId,
    ) -> Self {
        Self {
            position,
            radius,
            damage,
            effect_duration,
            kind,
            triggered: false,
            lifespan: TRAP_LIFESPAN_SECS,
            owner,
        }
    }
}

/// Singleton arena hazard. Non-wildlife actors cannot leave it while active.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dome {
    pub position: Vec2,
    pub radius: f64,
    pub remaining: f64,
    pub owner: ActorId,
}

impl Dome {
    /// Point inside the dome closest to `point` for a body of `radius`.
    pub fn clamp(&self, point: Vec2, radius: f64) -> Vec2 {
        let limit = (self.radius - radius).max(0.0);
        let offset = point - self.position;
        if offset.length() > limit {
            self.position + offset.normalize_or_zero() * limit
        } else {
            point
        }
    }
}

/// Area blast, resolved the moment it is spawned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Explosion {
    pub position: Vec2,
    pub radius: f64,
    pub damage: f64,
    pub knockback: f64,
    pub source: Option<ActorId>,
}

impl Explosion {
    /// Linear falloff at `distance`: 1 at the center, 0 at or beyond radius.
    pub fn falloff(&self, distance: f64) -> f64 {
        if self.radius <= 0.0 || distance >= self.radius {
            0.0
        } else {
            1.0 - distance / self.radius
        }
    }
}
