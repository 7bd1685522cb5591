//! Ability runtime model.
//!
//! Templates are immutable catalog entries. Actors own independent
//! [`Ability`] instances produced by [`AbilityTemplate::instantiate`], each
//! with its own cooldown and level. What an ability *does* is described by
//! an [`EffectSpec`] value, interpreted by the ability dispatcher.

use serde::Serialize;

use crate::constants::*;
use crate::enums::{AbilityCategory, Polarity, TrapKind};
use crate::hazards::OnHit;
use crate::status::StatusEffect;

/// Unsigned amount plus whether it damages or heals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Magnitude {
    pub amount: f64,
    pub polarity: Polarity,
}

impl Magnitude {
    pub fn damage(amount: f64) -> Self {
        Self {
            amount: amount.abs(),
            polarity: Polarity::Damage,
        }
    }

    pub fn heal(amount: f64) -> Self {
        Self {
            amount: amount.abs(),
            polarity: Polarity::Heal,
        }
    }

    /// Decode the legacy signed encoding: negative values are heals.
    pub fn from_signed(value: f64) -> Self {
        if value < 0.0 {
            Self::heal(-value)
        } else {
            Self::damage(value)
        }
    }

    /// Signed encoding (heals negative).
    pub fn signed(&self) -> f64 {
        match self.polarity {
            Polarity::Damage => self.amount,
            Polarity::Heal => -self.amount,
        }
    }

    pub fn is_heal(&self) -> bool {
        self.polarity == Polarity::Heal
    }

    /// Level scaling: `floor(amount * (1 + (level - 1) * 0.2))`.
    ///
    /// The floor applies to the unsigned amount before polarity, so a heal
    /// of 12.5 scales to 12 rather than 13.
    pub fn scaled(&self, level: u32) -> Self {
        let factor = 1.0 + f64::from(level.saturating_sub(1)) * ABILITY_DAMAGE_PER_LEVEL;
        Self {
            amount: (self.amount * factor).floor(),
            polarity: self.polarity,
        }
    }
}

/// Who a buff/debuff effect lands on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum EffectScope {
    Caster,
    Target,
    /// Caster plus every living teammate within the radius.
    AlliesInRange(f64),
    /// Every living opponent within the radius of the caster.
    EnemiesInRange(f64),
}

/// Projectile launch parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectileSpec {
    pub speed: f64,
    pub size: f64,
    /// Seconds before the projectile expires.
    pub life: f64,
    /// Number of projectiles per cast, fanned across `spread` radians.
    pub count: u32,
    pub spread: f64,
    pub explosion_radius: Option<f64>,
    pub on_hit: Option<OnHit>,
    pub color: &'static str,
}

impl ProjectileSpec {
    pub fn bullet(speed: f64, size: f64, life: f64, color: &'static str) -> Self {
        Self {
            speed,
            size,
            life,
            count: 1,
            spread: 0.0,
            explosion_radius: None,
            on_hit: None,
            color,
        }
    }
}

/// Data-driven description of what a successful cast does.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EffectSpec {
    Projectile(ProjectileSpec),
    /// Area blast at the aim point with linear falloff.
    Explosion { radius: f64, knockback: f64 },
    Buff { status: StatusEffect, scope: EffectScope },
    Debuff { status: StatusEffect, scope: EffectScope },
    /// Heal caster and allies within `radius` (0 = caster only).
    Heal { radius: f64 },
    Trap { radius: f64, kind: TrapKind },
    Dome { radius: f64 },
    /// Melee swing or breath: enemies within range and `half_angle` of facing.
    Cone { half_angle: f64, knockback: f64 },
    /// Instant reposition toward the aim point.
    Blink,
    /// Jump to the aim point and strike enemies around the landing spot.
    Leap { impact_radius: f64, knockback: f64 },
    /// Dash toward the aim point hitting enemies along the path.
    Charge { width: f64, knockback: f64 },
    /// Drag the target toward the caster by `distance`.
    Pull { distance: f64 },
    /// Revive downed allies within `radius`.
    Revive { radius: f64 },
}

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbilityTemplate {
    pub id: &'static str,
    pub category: AbilityCategory,
    pub cooldown: f64,
    pub range: f64,
    pub magnitude: Magnitude,
    pub duration: f64,
    pub energy_cost: f64,
    pub max_level: u32,
    pub effect: EffectSpec,
}

impl AbilityTemplate {
    /// Free, instant, zero-magnitude template. Fill in with the `with_*` builders.
    pub fn new(id: &'static str, category: AbilityCategory, effect: EffectSpec) -> Self {
        Self {
            id,
            category,
            cooldown: 0.0,
            range: 0.0,
            magnitude: Magnitude::default(),
            duration: 0.0,
            energy_cost: 0.0,
            max_level: ABILITY_MAX_LEVEL,
            effect,
        }
    }

    pub fn with_cooldown(mut self, cooldown: f64) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub fn with_range(mut self, range: f64) -> Self {
        self.range = range;
        self
    }

    pub fn with_magnitude(mut self, magnitude: Magnitude) -> Self {
        self.magnitude = magnitude;
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_cost(mut self, energy_cost: f64) -> Self {
        self.energy_cost = energy_cost;
        self
    }

    /// Fresh runtime instance: level 1, ready to use.
    pub fn instantiate(&self) -> Ability {
        Ability {
            id: self.id,
            category: self.category,
            cooldown: self.cooldown,
            current_cooldown: 0.0,
            range: self.range,
            magnitude: self.magnitude,
            duration: self.duration,
            energy_cost: self.energy_cost,
            level: 1,
            max_level: self.max_level.max(1),
            effect: self.effect.clone(),
        }
    }
}

/// Runtime ability owned by one actor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ability {
    pub id: &'static str,
    pub category: AbilityCategory,
    pub cooldown: f64,
    pub current_cooldown: f64,
    pub range: f64,
    pub magnitude: Magnitude,
    pub duration: f64,
    pub energy_cost: f64,
    pub level: u32,
    pub max_level: u32,
    pub effect: EffectSpec,
}

impl Ability {
    /// Off cooldown and affordable.
    pub fn can_use(&self, energy: f64) -> bool {
        self.current_cooldown <= 0.0 && energy >= self.energy_cost
    }

    /// Commit a use: start the cooldown and pay the energy cost.
    /// Returns false, touching nothing, when [`Ability::can_use`] fails.
    pub fn activate(&mut self, energy: &mut f64) -> bool {
        if !self.can_use(*energy) {
            return false;
        }
        self.current_cooldown = self.cooldown;
        *energy -= self.energy_cost;
        true
    }

    pub fn tick(&mut self, dt: f64) {
        self.current_cooldown = (self.current_cooldown - dt).max(0.0);
    }

    pub fn scaled_magnitude(&self) -> Magnitude {
        self.magnitude.scaled(self.level)
    }

    /// Level-scaled amount, floored. Heals report their positive amount.
    pub fn scaled_damage(&self) -> f64 {
        self.scaled_magnitude().amount
    }

    /// Raise the level by one if below max: damage x1.2, cooldown x0.9.
    pub fn upgrade(&mut self) -> bool {
        if self.level >= self.max_level {
            return false;
        }
        self.level += 1;
        self.magnitude.amount *= ABILITY_UPGRADE_DAMAGE_FACTOR;
        self.cooldown *= ABILITY_UPGRADE_COOLDOWN_FACTOR;
        self.current_cooldown = self.current_cooldown.min(self.cooldown);
        true
    }
}
