//! Actor model: shared combat state plus a per-kind payload.
//!
//! Every living thing on the map is an [`Actor`]. Hunter, monster and
//! wildlife specifics live in [`ActorKind`]; shared rules (damage, healing,
//! status effects, movement integration) are methods on `Actor`, and
//! kind-specific rules match on the payload.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::ability::Ability;
use crate::constants::*;
use crate::enums::{AbilitySlot, HunterRole, MonsterType, Species, StatusId, Team};
use crate::status::{EffectSet, StatusEffect};
use crate::types::{heading, Vec2};

/// Starting stats for an actor archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseStats {
    pub health: f64,
    pub energy: f64,
    pub energy_regen: f64,
    pub speed: f64,
    pub damage: f64,
    pub armor: f64,
    pub radius: f64,
}

pub fn hunter_stats(role: HunterRole) -> BaseStats {
    match role {
        HunterRole::Assault => BaseStats {
            health: 150.0,
            energy: 100.0,
            energy_regen: 10.0,
            speed: 150.0,
            damage: 0.0,
            armor: 20.0,
            radius: 14.0,
        },
        HunterRole::Trapper => BaseStats {
            health: 120.0,
            energy: 100.0,
            energy_regen: 12.0,
            speed: 165.0,
            damage: 0.0,
            armor: 10.0,
            radius: 14.0,
        },
        HunterRole::Medic => BaseStats {
            health: 110.0,
            energy: 120.0,
            energy_regen: 14.0,
            speed: 160.0,
            damage: 0.0,
            armor: 5.0,
            radius: 14.0,
        },
        HunterRole::Support => BaseStats {
            health: 130.0,
            energy: 110.0,
            energy_regen: 12.0,
            speed: 155.0,
            damage: 0.0,
            armor: 15.0,
            radius: 14.0,
        },
    }
}

pub fn monster_stats(monster_type: MonsterType) -> BaseStats {
    match monster_type {
        MonsterType::Behemoth => BaseStats {
            health: 500.0,
            energy: 100.0,
            energy_regen: 8.0,
            speed: 145.0,
            damage: 6.0,
            armor: 25.0,
            radius: 28.0,
        },
        MonsterType::Leviathan => BaseStats {
            health: 400.0,
            energy: 140.0,
            energy_regen: 12.0,
            speed: 150.0,
            damage: 4.0,
            armor: 15.0,
            radius: 26.0,
        },
        MonsterType::Phantom => BaseStats {
            health: 350.0,
            energy: 120.0,
            energy_regen: 10.0,
            speed: 175.0,
            damage: 8.0,
            armor: 10.0,
            radius: 22.0,
        },
    }
}

/// Stats and food value for a wildlife species.
pub fn species_stats(species: Species) -> (BaseStats, f64) {
    let stats = match species {
        Species::Crawler => BaseStats {
            health: 20.0,
            energy: 0.0,
            energy_regen: 0.0,
            speed: 110.0,
            damage: 0.0,
            armor: 0.0,
            radius: 8.0,
        },
        Species::Grazer => BaseStats {
            health: 40.0,
            energy: 0.0,
            energy_regen: 0.0,
            speed: 90.0,
            damage: 0.0,
            armor: 0.0,
            radius: 12.0,
        },
        Species::Tusker => BaseStats {
            health: 90.0,
            energy: 0.0,
            energy_regen: 0.0,
            speed: 70.0,
            damage: 0.0,
            armor: 10.0,
            radius: 18.0,
        },
    };
    let food = match species {
        Species::Crawler => 15.0,
        Species::Grazer => 30.0,
        Species::Tusker => 60.0,
    };
    (stats, food)
}

/// Per-type stat growth applied on each evolution.
/// `armor` is a flat bonus; the rest are multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvolutionMultipliers {
    pub health: f64,
    pub damage: f64,
    pub armor: f64,
    pub speed: f64,
    pub size: f64,
}

pub fn evolution_multipliers(monster_type: MonsterType) -> EvolutionMultipliers {
    match monster_type {
        MonsterType::Behemoth => EvolutionMultipliers {
            health: 1.5,
            damage: 1.3,
            armor: 5.0,
            speed: 0.95,
            size: 1.2,
        },
        MonsterType::Leviathan => EvolutionMultipliers {
            health: 1.4,
            damage: 1.35,
            armor: 5.0,
            speed: 1.0,
            size: 1.15,
        },
        MonsterType::Phantom => EvolutionMultipliers {
            health: 1.3,
            damage: 1.4,
            armor: 5.0,
            speed: 1.05,
            size: 1.1,
        },
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HunterState {
    pub role: HunterRole,
    pub class_id: &'static str,
    pub jetpack_fuel: f64,
    pub jetpack_max: f64,
    /// Boost requested this tick. Only takes effect while fuel remains.
    pub boosting: bool,
    /// Seconds of revive accumulated while downed.
    pub revive_progress: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonsterState {
    pub monster_type: MonsterType,
    pub stage: u8,
    pub evolution_progress: f64,
    pub evolution_threshold: f64,
    pub stealthed: bool,
}

impl MonsterState {
    /// Progress toward the next stage in [0, 1].
    pub fn evolution_fraction(&self) -> f64 {
        if self.evolution_threshold <= 0.0 {
            return 1.0;
        }
        (self.evolution_progress / self.evolution_threshold).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum WildlifeBehavior {
    #[default]
    Wander,
    Flee,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WildlifeState {
    pub species: Species,
    pub food_value: f64,
    pub behavior: WildlifeBehavior,
    /// Actor being fled. Re-resolved every tick by the flee scan.
    pub flee_from: Option<crate::types::ActorId>,
    pub wander_heading: f64,
    pub wander_timer: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ActorKind {
    Hunter(HunterState),
    Monster(MonsterState),
    Wildlife(WildlifeState),
}

/// Outcome of a single [`Actor::take_damage`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DamageReport {
    /// Health actually removed, after shield and armor.
    pub dealt: f64,
    /// Damage soaked by a shield.
    pub absorbed: f64,
    /// This hit took the actor from alive to dead.
    pub lethal: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Actor {
    pub name: String,
    pub position: Vec2,
    /// Movement intent, each axis in [-1, 1]. Scaled by effective speed.
    pub velocity: Vec2,
    pub radius: f64,
    pub health: f64,
    pub max_health: f64,
    pub energy: f64,
    pub max_energy: f64,
    pub energy_regen: f64,
    /// Effective speed computed on the last update.
    pub speed: f64,
    pub base_speed: f64,
    pub damage: f64,
    pub armor: f64,
    pub alive: bool,
    pub downed: bool,
    pub buffs: EffectSet,
    pub debuffs: EffectSet,
    /// Facing angle in radians.
    pub facing: f64,
    pub abilities: BTreeMap<AbilitySlot, Ability>,
    pub kind: ActorKind,
}

impl Actor {
    pub fn new(name: impl Into<String>, position: Vec2, stats: BaseStats, kind: ActorKind) -> Self {
        Self {
            name: name.into(),
            position,
            velocity: Vec2::ZERO,
            radius: stats.radius,
            health: stats.health,
            max_health: stats.health,
            energy: stats.energy,
            max_energy: stats.energy,
            energy_regen: stats.energy_regen,
            speed: stats.speed,
            base_speed: stats.speed,
            damage: stats.damage,
            armor: stats.armor.clamp(0.0, MAX_ARMOR),
            alive: true,
            downed: false,
            buffs: EffectSet::default(),
            debuffs: EffectSet::default(),
            facing: 0.0,
            abilities: BTreeMap::new(),
            kind,
        }
    }

    pub fn hunter(role: HunterRole, name: impl Into<String>, position: Vec2) -> Self {
        let kind = ActorKind::Hunter(HunterState {
            role,
            class_id: role.class_id(),
            jetpack_fuel: JETPACK_MAX_FUEL,
            jetpack_max: JETPACK_MAX_FUEL,
            boosting: false,
            revive_progress: 0.0,
        });
        Self::new(name, position, hunter_stats(role), kind)
    }

    pub fn monster(monster_type: MonsterType, name: impl Into<String>, position: Vec2) -> Self {
        let kind = ActorKind::Monster(MonsterState {
            monster_type,
            stage: 1,
            evolution_progress: 0.0,
            evolution_threshold: BASE_EVOLUTION_THRESHOLD,
            stealthed: false,
        });
        Self::new(name, position, monster_stats(monster_type), kind)
    }

    pub fn wildlife(species: Species, name: impl Into<String>, position: Vec2) -> Self {
        let (stats, food_value) = species_stats(species);
        let kind = ActorKind::Wildlife(WildlifeState {
            species,
            food_value,
            behavior: WildlifeBehavior::Wander,
            flee_from: None,
            wander_heading: 0.0,
            wander_timer: 0.0,
        });
        Self::new(name, position, stats, kind)
    }

    pub fn with_abilities(mut self, abilities: BTreeMap<AbilitySlot, Ability>) -> Self {
        self.abilities = abilities;
        self
    }

    pub fn team(&self) -> Team {
        match self.kind {
            ActorKind::Hunter(_) => Team::Hunters,
            ActorKind::Monster(_) => Team::Monster,
            ActorKind::Wildlife(_) => Team::Wildlife,
        }
    }

    pub fn as_hunter(&self) -> Option<&HunterState> {
        match &self.kind {
            ActorKind::Hunter(h) => Some(h),
            _ => None,
        }
    }

    pub fn as_hunter_mut(&mut self) -> Option<&mut HunterState> {
        match &mut self.kind {
            ActorKind::Hunter(h) => Some(h),
            _ => None,
        }
    }

    pub fn as_monster(&self) -> Option<&MonsterState> {
        match &self.kind {
            ActorKind::Monster(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_wildlife(&self) -> Option<&WildlifeState> {
        match &self.kind {
            ActorKind::Wildlife(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_wildlife_mut(&mut self) -> Option<&mut WildlifeState> {
        match &mut self.kind {
            ActorKind::Wildlife(w) => Some(w),
            _ => None,
        }
    }

    pub fn evolution_stage(&self) -> Option<u8> {
        self.as_monster().map(|m| m.stage)
    }

    pub fn health_fraction(&self) -> f64 {
        if self.max_health > 0.0 {
            self.health / self.max_health
        } else {
            0.0
        }
    }

    pub fn is_invisible(&self) -> bool {
        self.buffs.any_invisible()
    }

    pub fn is_immobilized(&self) -> bool {
        self.buffs.any_immobilized() || self.debuffs.any_immobilized()
    }

    /// Product of speed multipliers over buffs and debuffs.
    pub fn speed_multiplier(&self) -> f64 {
        self.buffs.speed_multiplier() * self.debuffs.speed_multiplier()
    }

    /// Product of damage multipliers over buffs.
    pub fn damage_multiplier(&self) -> f64 {
        self.buffs.damage_multiplier()
    }

    /// Advance timers, regenerate energy, and integrate movement.
    pub fn update(&mut self, dt: f64) {
        self.buffs.tick(dt);
        self.debuffs.tick(dt);
        for ability in self.abilities.values_mut() {
            ability.tick(dt);
        }

        if !self.alive {
            self.velocity = Vec2::ZERO;
            self.speed = 0.0;
            return;
        }

        self.energy = (self.energy + self.energy_regen * dt).clamp(0.0, self.max_energy);

        let variant_factor = self.variant_upkeep(dt);
        self.speed = if self.is_immobilized() {
            0.0
        } else {
            self.base_speed * self.speed_multiplier() * variant_factor
        };
        self.position += self.velocity * self.speed * dt;

        if self.velocity.length_squared() > 0.0 {
            self.facing = heading(self.velocity);
        }
    }

    /// Kind-specific per-tick bookkeeping. Returns an extra speed factor.
    fn variant_upkeep(&mut self, dt: f64) -> f64 {
        let invisible = self.buffs.any_invisible();
        match &mut self.kind {
            ActorKind::Hunter(h) => {
                if h.boosting && h.jetpack_fuel > 0.0 {
                    h.jetpack_fuel = (h.jetpack_fuel - JETPACK_DRAIN_PER_SEC * dt).max(0.0);
                    JETPACK_SPEED_MULTIPLIER
                } else {
                    h.jetpack_fuel = (h.jetpack_fuel + JETPACK_REGEN_PER_SEC * dt).min(h.jetpack_max);
                    1.0
                }
            }
            ActorKind::Monster(m) => {
                m.stealthed = invisible;
                1.0
            }
            ActorKind::Wildlife(_) => 1.0,
        }
    }

    /// Apply incoming damage through shield, then armor.
    ///
    /// A shield pool at least as large as the hit soaks all of it. A smaller
    /// pool is emptied and the rest is mitigated by armor with a floor of
    /// one point per hit. Dead actors ignore damage.
    pub fn take_damage(&mut self, amount: f64) -> DamageReport {
        if !self.alive || amount <= 0.0 || amount.is_nan() {
            return DamageReport::default();
        }

        let mut remaining = amount;
        let mut absorbed = 0.0;
        if let Some(shield) = self.buffs.first_shield_mut() {
            let pool = shield.modifiers.shield;
            if remaining <= pool {
                shield.modifiers.shield -= remaining;
                return DamageReport {
                    dealt: 0.0,
                    absorbed: remaining,
                    lethal: false,
                };
            }
            remaining -= pool;
            absorbed = pool;
            shield.modifiers.shield = 0.0;
        }

        let mitigation = 1.0 - self.armor * ARMOR_MITIGATION_PER_POINT;
        let actual = (remaining * mitigation).max(MIN_DAMAGE_PER_HIT);
        self.health -= actual;

        let mut lethal = false;
        if self.health <= 0.0 {
            self.health = 0.0;
            self.alive = false;
            self.downed = true;
            self.velocity = Vec2::ZERO;
            lethal = true;
        }

        DamageReport {
            dealt: actual,
            absorbed,
            lethal,
        }
    }

    /// Restore health up to max. Returns the amount actually restored.
    pub fn heal(&mut self, amount: f64) -> f64 {
        if !self.alive || amount <= 0.0 || amount.is_nan() {
            return 0.0;
        }
        let before = self.health;
        self.health = (self.health + amount).min(self.max_health);
        self.health - before
    }

    /// Bring a dead or downed actor back at half health.
    pub fn revive(&mut self) {
        self.alive = true;
        self.downed = false;
        self.health = self.max_health * REVIVE_HEALTH_FRACTION;
        if let Some(h) = self.as_hunter_mut() {
            h.revive_progress = 0.0;
        }
    }

    pub fn add_buff(&mut self, effect: StatusEffect) {
        self.buffs.add(effect);
    }

    pub fn add_debuff(&mut self, effect: StatusEffect) {
        self.debuffs.add(effect);
    }

    pub fn can_use(&self, slot: AbilitySlot) -> bool {
        self.alive
            && self
                .abilities
                .get(&slot)
                .is_some_and(|a| a.can_use(self.energy))
    }

    /// Start a cast from `slot`: gate on [`Ability::can_use`], pay the cost,
    /// start the cooldown and drop any cloak. Returns a copy of the ability
    /// as it stood when cast, or `None` with nothing changed.
    pub fn try_activate(&mut self, slot: AbilitySlot) -> Option<Ability> {
        if !self.alive {
            return None;
        }
        let ability = self.abilities.get_mut(&slot)?;
        if !ability.activate(&mut self.energy) {
            return None;
        }
        let cast = ability.clone();
        self.buffs.remove(StatusId::Cloak);
        Some(cast)
    }

    /// Add evolution progress. Evolves at most once per call.
    /// Returns true when an evolution happened. No-op for non-monsters.
    pub fn feed(&mut self, food_value: f64) -> bool {
        let ready = match &mut self.kind {
            ActorKind::Monster(m) => {
                m.evolution_progress += food_value.max(0.0);
                m.evolution_progress >= m.evolution_threshold && m.stage < MAX_EVOLUTION_STAGE
            }
            _ => false,
        };
        ready && self.evolve()
    }

    /// Advance one evolution stage: grow stats by the type's multipliers,
    /// full heal, +armor, and upgrade every ability.
    pub fn evolve(&mut self) -> bool {
        let growth = match &mut self.kind {
            ActorKind::Monster(m) if m.stage < MAX_EVOLUTION_STAGE => {
                m.stage += 1;
                m.evolution_progress = 0.0;
                m.evolution_threshold *= EVOLUTION_THRESHOLD_GROWTH;
                evolution_multipliers(m.monster_type)
            }
            _ => return false,
        };

        self.max_health *= growth.health;
        self.health = self.max_health;
        self.damage *= growth.damage;
        self.base_speed *= growth.speed;
        self.speed *= growth.speed;
        self.radius *= growth.size;
        self.armor = (self.armor + growth.armor).min(MAX_ARMOR);
        for ability in self.abilities.values_mut() {
            ability.upgrade();
        }
        true
    }
}
