//! Immutable ability template table.
//!
//! Keyed by [`Archetype`] (hunter role or monster type), then by slot.
//! Actors never hold templates; they receive independent instances from
//! [`AbilityCatalog::loadout`].

use std::collections::BTreeMap;

use hunted_core::ability::{
    Ability, AbilityTemplate, EffectScope, EffectSpec, Magnitude, ProjectileSpec,
};
use hunted_core::enums::{AbilityCategory, AbilitySlot, HunterRole, MonsterType, StatusId, TrapKind};
use hunted_core::hazards::OnHit;
use hunted_core::status::{Modifiers, StatusEffect};

/// Catalog key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Archetype {
    Hunter(HunterRole),
    Monster(MonsterType),
}

#[derive(Debug, Clone)]
pub struct AbilityCatalog {
    entries: BTreeMap<Archetype, BTreeMap<AbilitySlot, AbilityTemplate>>,
}

impl Default for AbilityCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl AbilityCatalog {
    /// Empty catalog. Mostly for tests that register their own templates.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// The stock table for every hunter role and monster type.
    pub fn standard() -> Self {
        let mut catalog = Self::empty();
        for role in HunterRole::ALL {
            for (slot, template) in hunter_kit(role) {
                catalog.register(Archetype::Hunter(role), slot, template);
            }
        }
        for monster_type in [MonsterType::Behemoth, MonsterType::Leviathan, MonsterType::Phantom] {
            for (slot, template) in monster_kit(monster_type) {
                catalog.register(Archetype::Monster(monster_type), slot, template);
            }
        }
        catalog
    }

    pub fn register(&mut self, archetype: Archetype, slot: AbilitySlot, template: AbilityTemplate) {
        self.entries.entry(archetype).or_default().insert(slot, template);
    }

    pub fn template(&self, archetype: Archetype, slot: AbilitySlot) -> Option<&AbilityTemplate> {
        self.entries.get(&archetype)?.get(&slot)
    }

    /// Slots defined for an archetype, in slot order.
    pub fn slots(&self, archetype: Archetype) -> Vec<AbilitySlot> {
        self.entries
            .get(&archetype)
            .map(|kit| kit.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Fresh level-1 instances of every template for an archetype.
    pub fn loadout(&self, archetype: Archetype) -> BTreeMap<AbilitySlot, Ability> {
        self.entries
            .get(&archetype)
            .map(|kit| {
                kit.iter()
                    .map(|(slot, template)| (*slot, template.instantiate()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn status(id: StatusId, duration: f64, modifiers: Modifiers) -> StatusEffect {
    StatusEffect::new(id, duration, modifiers)
}

fn bullet(speed: f64, size: f64, life: f64, color: &'static str) -> EffectSpec {
    EffectSpec::Projectile(ProjectileSpec::bullet(speed, size, life, color))
}

fn shell(speed: f64, size: f64, life: f64, radius: f64, color: &'static str) -> EffectSpec {
    EffectSpec::Projectile(ProjectileSpec {
        explosion_radius: Some(radius),
        ..ProjectileSpec::bullet(speed, size, life, color)
    })
}

fn tagged(speed: f64, size: f64, life: f64, on_hit: OnHit, color: &'static str) -> EffectSpec {
    EffectSpec::Projectile(ProjectileSpec {
        on_hit: Some(on_hit),
        ..ProjectileSpec::bullet(speed, size, life, color)
    })
}

fn hunter_kit(role: HunterRole) -> Vec<(AbilitySlot, AbilityTemplate)> {
    use AbilityCategory as C;
    use AbilitySlot as S;

    match role {
        HunterRole::Assault => vec![
            (
                S::Primary,
                AbilityTemplate::new("assault_rifle", C::Projectile, bullet(700.0, 4.0, 0.9, "#ffd54f"))
                    .with_cooldown(0.15)
                    .with_range(600.0)
                    .with_magnitude(Magnitude::damage(8.0)),
            ),
            (
                S::Secondary,
                AbilityTemplate::new(
                    "grenade_launcher",
                    C::Area,
                    shell(400.0, 8.0, 1.1, 60.0, "#ff8a65"),
                )
                .with_cooldown(4.0)
                .with_range(450.0)
                .with_magnitude(Magnitude::damage(30.0))
                .with_cost(10.0),
            ),
            (
                S::Ability1,
                AbilityTemplate::new(
                    "personal_shield",
                    C::Buff,
                    EffectSpec::Buff {
                        status: StatusEffect::shield(60.0, 4.0),
                        scope: EffectScope::Caster,
                    },
                )
                .with_cooldown(15.0)
                .with_duration(4.0)
                .with_cost(20.0),
            ),
            (
                S::Ability2,
                AbilityTemplate::new(
                    "stim",
                    C::Buff,
                    EffectSpec::Buff {
                        status: status(
                            StatusId::Haste,
                            5.0,
                            Modifiers {
                                speed_multiplier: 1.5,
                                ..Modifiers::default()
                            },
                        ),
                        scope: EffectScope::Caster,
                    },
                )
                .with_cooldown(12.0)
                .with_duration(5.0)
                .with_cost(15.0),
            ),
        ],
        HunterRole::Trapper => vec![
            (
                S::Primary,
                AbilityTemplate::new("smg", C::Projectile, bullet(650.0, 3.0, 0.7, "#aed581"))
                    .with_cooldown(0.1)
                    .with_range(450.0)
                    .with_magnitude(Magnitude::damage(6.0)),
            ),
            (
                S::Secondary,
                AbilityTemplate::new(
                    "harpoon",
                    C::Utility,
                    tagged(600.0, 6.0, 0.9, OnHit::Pull(120.0), "#90a4ae"),
                )
                .with_cooldown(6.0)
                .with_range(500.0)
                .with_magnitude(Magnitude::damage(12.0))
                .with_cost(15.0),
            ),
            (
                S::Ability1,
                AbilityTemplate::new("mobile_arena", C::Utility, EffectSpec::Dome { radius: 400.0 })
                    .with_cooldown(60.0)
                    .with_duration(20.0)
                    .with_cost(40.0),
            ),
            (
                S::Ability2,
                AbilityTemplate::new(
                    "bear_trap",
                    C::Trap,
                    EffectSpec::Trap {
                        radius: 25.0,
                        kind: TrapKind::Immobilize,
                    },
                )
                .with_cooldown(8.0)
                .with_range(150.0)
                .with_magnitude(Magnitude::damage(20.0))
                .with_duration(2.5)
                .with_cost(15.0),
            ),
        ],
        HunterRole::Medic => vec![
            (
                S::Primary,
                AbilityTemplate::new("pistol", C::Projectile, bullet(650.0, 3.0, 0.8, "#e0e0e0"))
                    .with_cooldown(0.3)
                    .with_range(500.0)
                    .with_magnitude(Magnitude::damage(5.0)),
            ),
            (
                S::Secondary,
                AbilityTemplate::new(
                    "tranquilizer",
                    C::Debuff,
                    tagged(
                        700.0,
                        4.0,
                        0.9,
                        OnHit::Debuff(StatusEffect::slow(0.5, 3.0)),
                        "#ce93d8",
                    ),
                )
                .with_cooldown(3.0)
                .with_range(550.0)
                .with_magnitude(Magnitude::damage(10.0))
                .with_cost(10.0),
            ),
            (
                S::Ability1,
                AbilityTemplate::new("healing_burst", C::Heal, EffectSpec::Heal { radius: 200.0 })
                    .with_cooldown(8.0)
                    .with_range(200.0)
                    .with_magnitude(Magnitude::heal(40.0))
                    .with_cost(25.0),
            ),
            (
                S::Ability2,
                AbilityTemplate::new("revive_pulse", C::Heal, EffectSpec::Revive { radius: 150.0 })
                    .with_cooldown(30.0)
                    .with_range(150.0)
                    .with_cost(40.0),
            ),
        ],
        HunterRole::Support => vec![
            (
                S::Primary,
                AbilityTemplate::new("laser_cutter", C::Projectile, bullet(800.0, 3.0, 0.7, "#4dd0e1"))
                    .with_cooldown(0.2)
                    .with_range(500.0)
                    .with_magnitude(Magnitude::damage(7.0)),
            ),
            (
                S::Secondary,
                AbilityTemplate::new(
                    "shield_projector",
                    C::Buff,
                    EffectSpec::Buff {
                        status: StatusEffect::shield(50.0, 5.0),
                        scope: EffectScope::Target,
                    },
                )
                .with_cooldown(6.0)
                .with_range(300.0)
                .with_duration(5.0)
                .with_cost(20.0),
            ),
            (
                S::Ability1,
                AbilityTemplate::new(
                    "orbital_strike",
                    C::Area,
                    EffectSpec::Explosion {
                        radius: 150.0,
                        knockback: 40.0,
                    },
                )
                .with_cooldown(25.0)
                .with_range(600.0)
                .with_magnitude(Magnitude::damage(60.0))
                .with_cost(40.0),
            ),
            (
                S::Ability2,
                AbilityTemplate::new(
                    "cloak_field",
                    C::Buff,
                    EffectSpec::Buff {
                        status: status(
                            StatusId::Cloak,
                            6.0,
                            Modifiers {
                                invisible: true,
                                ..Modifiers::default()
                            },
                        ),
                        scope: EffectScope::AlliesInRange(250.0),
                    },
                )
                .with_cooldown(30.0)
                .with_range(250.0)
                .with_duration(6.0)
                .with_cost(30.0),
            ),
        ],
    }
}

fn monster_kit(monster_type: MonsterType) -> Vec<(AbilitySlot, AbilityTemplate)> {
    use AbilityCategory as C;
    use AbilitySlot as S;

    match monster_type {
        MonsterType::Behemoth => vec![
            (
                S::Primary,
                AbilityTemplate::new(
                    "maul",
                    C::Damage,
                    EffectSpec::Cone {
                        half_angle: 0.8,
                        knockback: 20.0,
                    },
                )
                .with_cooldown(0.8)
                .with_range(70.0)
                .with_magnitude(Magnitude::damage(15.0)),
            ),
            (
                S::Secondary,
                AbilityTemplate::new("boulder_throw", C::Projectile, shell(450.0, 12.0, 1.2, 70.0, "#8d6e63"))
                    .with_cooldown(3.0)
                    .with_range(500.0)
                    .with_magnitude(Magnitude::damage(35.0))
                    .with_cost(15.0),
            ),
            (
                S::Ability1,
                AbilityTemplate::new(
                    "fire_breath",
                    C::Area,
                    EffectSpec::Cone {
                        half_angle: 0.5,
                        knockback: 0.0,
                    },
                )
                .with_cooldown(8.0)
                .with_range(180.0)
                .with_magnitude(Magnitude::damage(25.0))
                .with_cost(30.0),
            ),
            (
                S::Ability2,
                AbilityTemplate::new(
                    "leap_smash",
                    C::Damage,
                    EffectSpec::Leap {
                        impact_radius: 90.0,
                        knockback: 60.0,
                    },
                )
                .with_cooldown(10.0)
                .with_range(350.0)
                .with_magnitude(Magnitude::damage(30.0))
                .with_cost(25.0),
            ),
            (
                S::Ability3,
                AbilityTemplate::new(
                    "charge",
                    C::Utility,
                    EffectSpec::Charge {
                        width: 30.0,
                        knockback: 80.0,
                    },
                )
                .with_cooldown(12.0)
                .with_range(400.0)
                .with_magnitude(Magnitude::damage(20.0))
                .with_cost(25.0),
            ),
            (
                S::Ability4,
                AbilityTemplate::new(
                    "rage",
                    C::Buff,
                    EffectSpec::Buff {
                        status: status(
                            StatusId::Rage,
                            6.0,
                            Modifiers {
                                damage_multiplier: 1.5,
                                speed_multiplier: 1.2,
                                ..Modifiers::default()
                            },
                        ),
                        scope: EffectScope::Caster,
                    },
                )
                .with_cooldown(25.0)
                .with_duration(6.0)
                .with_cost(30.0),
            ),
        ],
        MonsterType::Leviathan => vec![
            (
                S::Primary,
                AbilityTemplate::new("acid_spit", C::Projectile, bullet(500.0, 6.0, 1.0, "#4fc3f7"))
                    .with_cooldown(0.5)
                    .with_range(450.0)
                    .with_magnitude(Magnitude::damage(10.0)),
            ),
            (
                S::Secondary,
                AbilityTemplate::new("tidal_orb", C::Area, shell(380.0, 10.0, 1.4, 80.0, "#0288d1"))
                    .with_cooldown(3.0)
                    .with_range(500.0)
                    .with_magnitude(Magnitude::damage(30.0))
                    .with_cost(15.0),
            ),
            (
                S::Ability1,
                AbilityTemplate::new(
                    "undertow",
                    C::Debuff,
                    EffectSpec::Debuff {
                        status: StatusEffect::slow(0.4, 3.0),
                        scope: EffectScope::EnemiesInRange(250.0),
                    },
                )
                .with_cooldown(12.0)
                .with_range(250.0)
                .with_duration(3.0)
                .with_cost(30.0),
            ),
            (
                S::Ability2,
                AbilityTemplate::new(
                    "depth_charge",
                    C::Area,
                    EffectSpec::Explosion {
                        radius: 120.0,
                        knockback: 60.0,
                    },
                )
                .with_cooldown(14.0)
                .with_range(400.0)
                .with_magnitude(Magnitude::damage(40.0))
                .with_cost(35.0),
            ),
            (
                S::Ability3,
                AbilityTemplate::new("abyssal_grab", C::Utility, EffectSpec::Pull { distance: 150.0 })
                    .with_cooldown(10.0)
                    .with_range(350.0)
                    .with_magnitude(Magnitude::damage(10.0))
                    .with_cost(25.0),
            ),
            (
                S::Ability4,
                AbilityTemplate::new(
                    "tide_shell",
                    C::Buff,
                    EffectSpec::Buff {
                        status: StatusEffect::shield(80.0, 5.0),
                        scope: EffectScope::Caster,
                    },
                )
                .with_cooldown(20.0)
                .with_duration(5.0)
                .with_cost(30.0),
            ),
        ],
        MonsterType::Phantom => vec![
            (
                S::Primary,
                AbilityTemplate::new(
                    "claw",
                    C::Damage,
                    EffectSpec::Cone {
                        half_angle: 0.7,
                        knockback: 10.0,
                    },
                )
                .with_cooldown(0.5)
                .with_range(60.0)
                .with_magnitude(Magnitude::damage(12.0)),
            ),
            (
                S::Secondary,
                AbilityTemplate::new(
                    "shadow_bolt",
                    C::Projectile,
                    tagged(
                        550.0,
                        6.0,
                        0.9,
                        OnHit::Debuff(StatusEffect::slow(0.6, 2.0)),
                        "#7e57c2",
                    ),
                )
                .with_cooldown(2.5)
                .with_range(450.0)
                .with_magnitude(Magnitude::damage(20.0))
                .with_cost(15.0),
            ),
            (
                S::Ability1,
                AbilityTemplate::new(
                    "vanish",
                    C::Buff,
                    EffectSpec::Buff {
                        status: status(
                            StatusId::Cloak,
                            5.0,
                            Modifiers {
                                invisible: true,
                                speed_multiplier: 1.2,
                                ..Modifiers::default()
                            },
                        ),
                        scope: EffectScope::Caster,
                    },
                )
                .with_cooldown(18.0)
                .with_duration(5.0)
                .with_cost(30.0),
            ),
            (
                S::Ability2,
                AbilityTemplate::new("blink", C::Utility, EffectSpec::Blink)
                    .with_cooldown(6.0)
                    .with_range(300.0)
                    .with_cost(20.0),
            ),
            (
                S::Ability3,
                AbilityTemplate::new("abduct", C::Utility, EffectSpec::Pull { distance: 200.0 })
                    .with_cooldown(14.0)
                    .with_range(300.0)
                    .with_magnitude(Magnitude::damage(15.0))
                    .with_cost(25.0),
            ),
            (
                S::Ability4,
                AbilityTemplate::new(
                    "ambush",
                    C::Damage,
                    EffectSpec::Leap {
                        impact_radius: 70.0,
                        knockback: 30.0,
                    },
                )
                .with_cooldown(12.0)
                .with_range(300.0)
                .with_magnitude(Magnitude::damage(35.0))
                .with_cost(25.0),
            ),
        ],
    }
}
