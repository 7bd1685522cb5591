//! Effect dispatcher: the single interpreter for [`EffectSpec`].

use tracing::{debug, trace};

use hunted_core::ability::{Ability, EffectScope, EffectSpec};
use hunted_core::enums::AbilitySlot;
use hunted_core::events::GameEvent;
use hunted_core::hazards::{Dome, Explosion, Projectile, Trap};
use hunted_core::types::{angle_between, direction, from_heading, heading, ActorId, Vec2};

use crate::world::{CombatWorld, Combatant};

/// Cast `slot` for `user`.
///
/// Gated by the activation check: on failure nothing changes and `false` is
/// returned. On success the cost and cooldown are paid, an `AbilityUsed`
/// event is emitted, and the effect runs. `target` takes precedence over
/// `aim` when it names a living actor.
pub fn use_ability<W: CombatWorld + ?Sized>(
    world: &mut W,
    user: ActorId,
    slot: AbilitySlot,
    target: Option<ActorId>,
    aim: Vec2,
) -> bool {
    let Some(caster) = world.combatant(user) else {
        return false;
    };
    if !caster.alive {
        return false;
    }
    let Some(ability) = world.activate(user, slot) else {
        return false;
    };

    debug!(actor = ?user, ?slot, ability = ability.id, level = ability.level, "ability cast");
    world.notify(GameEvent::AbilityUsed {
        actor: user,
        slot,
        ability: ability.id,
    });
    apply_effect(world, &caster, &ability, target, aim);
    true
}

/// Whether an effect is meant for the caster's teammates.
pub fn is_supportive(effect: &EffectSpec) -> bool {
    matches!(
        effect,
        EffectSpec::Heal { .. }
            | EffectSpec::Revive { .. }
            | EffectSpec::Buff {
                scope: EffectScope::Target | EffectScope::AlliesInRange(_),
                ..
            }
    )
}

/// Run an already-paid ability's effect.
pub fn apply_effect<W: CombatWorld + ?Sized>(
    world: &mut W,
    caster: &Combatant,
    ability: &Ability,
    target: Option<ActorId>,
    aim: Vec2,
) {
    let magnitude = ability.scaled_magnitude();
    let target = target.and_then(|id| world.combatant(id)).filter(|c| c.alive);
    let aim = target.map_or(aim, |t| t.position);
    // Heal polarity never reaches `damage`, damage polarity never reaches `heal`.
    let (harm, mend) = if magnitude.is_heal() {
        (0.0, magnitude.amount)
    } else {
        (magnitude.amount, 0.0)
    };
    let scaled = harm * caster.damage_multiplier;
    let melee = if magnitude.is_heal() {
        0.0
    } else {
        (harm + caster.damage) * caster.damage_multiplier
    };

    match &ability.effect {
        EffectSpec::Projectile(spec) => {
            let base = heading(direction(caster.position, aim));
            let count = spec.count.max(1);
            for i in 0..count {
                let angle = if count > 1 {
                    base - spec.spread / 2.0 + spec.spread * f64::from(i) / f64::from(count - 1)
                } else {
                    base
                };
                let dir = from_heading(angle);
                world.spawn_projectile(Projectile {
                    position: caster.position + dir * (caster.radius + spec.size),
                    velocity: dir * spec.speed,
                    damage: harm,
                    owner: caster.id,
                    owner_team: caster.team,
                    size: spec.size,
                    color: spec.color,
                    life: spec.life,
                    explosion_radius: spec.explosion_radius,
                    on_hit: spec.on_hit.clone(),
                });
            }
        }
        EffectSpec::Explosion { radius, knockback } => {
            world.spawn_explosion(Explosion {
                position: clamp_to_range(caster.position, aim, ability.range),
                radius: *radius,
                damage: scaled,
                knockback: *knockback,
                source: Some(caster.id),
            });
        }
        EffectSpec::Buff { status, scope } => {
            for id in scope_targets(world, caster, *scope, target, ability.range, true) {
                world.add_buff(id, status.clone());
            }
        }
        EffectSpec::Debuff { status, scope } => {
            for id in scope_targets(world, caster, *scope, target, ability.range, false) {
                world.add_debuff(id, status.clone());
            }
        }
        EffectSpec::Heal { radius } => {
            let radius = radius.max(0.0);
            for ally in world.combatants() {
                let in_reach = ally.id == caster.id
                    || (radius > 0.0 && caster.position.distance(ally.position) <= radius);
                if mend > 0.0 && ally.alive && ally.team == caster.team && in_reach {
                    world.heal(ally.id, mend);
                }
            }
        }
        EffectSpec::Trap { radius, kind } => {
            let position = world.constrain(
                clamp_to_range(caster.position, aim, ability.range),
                *radius,
            );
            world.spawn_trap(Trap::new(
                position,
                *radius,
                scaled,
                ability.duration,
                *kind,
                caster.id,
            ));
        }
        EffectSpec::Dome { radius } => {
            world.spawn_dome(Dome {
                position: caster.position,
                radius: *radius,
                remaining: ability.duration,
                owner: caster.id,
            });
        }
        EffectSpec::Cone {
            half_angle,
            knockback,
        } => {
            let facing = heading(direction(caster.position, aim));
            for victim in enemies(world, caster) {
                let distance = caster.position.distance(victim.position);
                if distance > ability.range + victim.radius {
                    continue;
                }
                let bearing = heading(direction(caster.position, victim.position));
                if distance > f64::EPSILON && angle_between(facing, bearing).abs() > *half_angle {
                    continue;
                }
                strike(world, caster, &victim, melee, caster.position, *knockback);
            }
        }
        EffectSpec::Blink => {
            let landing = world.constrain(
                clamp_to_range(caster.position, aim, ability.range),
                caster.radius,
            );
            world.displace(caster.id, landing);
        }
        EffectSpec::Leap {
            impact_radius,
            knockback,
        } => {
            let landing = world.constrain(
                clamp_to_range(caster.position, aim, ability.range),
                caster.radius,
            );
            world.displace(caster.id, landing);
            for victim in enemies(world, caster) {
                if landing.distance(victim.position) <= impact_radius + victim.radius {
                    strike(world, caster, &victim, melee, landing, *knockback);
                }
            }
        }
        EffectSpec::Charge { width, knockback } => {
            let start = caster.position;
            let end = world.constrain(clamp_to_range(start, aim, ability.range), caster.radius);
            for victim in enemies(world, caster) {
                if distance_to_segment(victim.position, start, end) <= width + victim.radius {
                    strike(world, caster, &victim, melee, start, *knockback);
                }
            }
            world.displace(caster.id, end);
        }
        EffectSpec::Pull { distance } => {
            let grabbed = target
                .filter(|t| t.is_enemy_of(caster) && t.gap_to(caster) <= ability.range)
                .or_else(|| nearest_enemy_to(world, caster, aim, ability.range));
            let Some(victim) = grabbed else {
                return;
            };
            if scaled > 0.0 {
                world.damage(victim.id, scaled, Some(caster.id));
            }
            if let Some(victim) = world.combatant(victim.id).filter(|c| c.alive) {
                let travel = distance.min(victim.gap_to(caster).max(0.0));
                let to = victim.position + direction(victim.position, caster.position) * travel;
                let to = world.constrain(to, victim.radius);
                world.displace(victim.id, to);
            }
        }
        EffectSpec::Revive { radius } => {
            for ally in world.combatants() {
                if ally.id != caster.id
                    && ally.team == caster.team
                    && ally.downed
                    && caster.position.distance(ally.position) <= *radius
                {
                    world.revive(ally.id);
                }
            }
        }
    }
}

/// Living opponents of the caster, in scan order.
fn enemies<W: CombatWorld + ?Sized>(world: &W, caster: &Combatant) -> Vec<Combatant> {
    world
        .combatants()
        .into_iter()
        .filter(|c| c.alive && c.is_enemy_of(caster))
        .collect()
}

/// Damage `victim` then shove it away from `origin` if it survived.
fn strike<W: CombatWorld + ?Sized>(
    world: &mut W,
    caster: &Combatant,
    victim: &Combatant,
    amount: f64,
    origin: Vec2,
    knockback: f64,
) {
    if amount > 0.0 {
        let dealt = world.damage(victim.id, amount, Some(caster.id));
        trace!(attacker = ?caster.id, victim = ?victim.id, dealt, "melee hit");
    }
    if knockback <= 0.0 {
        return;
    }
    if let Some(victim) = world.combatant(victim.id).filter(|c| c.alive) {
        let to = victim.position + direction(origin, victim.position) * knockback;
        let to = world.constrain(to, victim.radius);
        world.displace(victim.id, to);
    }
}

fn scope_targets<W: CombatWorld + ?Sized>(
    world: &W,
    caster: &Combatant,
    scope: EffectScope,
    target: Option<Combatant>,
    range: f64,
    friendly: bool,
) -> Vec<ActorId> {
    match scope {
        EffectScope::Caster => vec![caster.id],
        EffectScope::Target => {
            let wanted = target.filter(|t| {
                t.is_enemy_of(caster) != friendly && t.gap_to(caster) <= range.max(0.0)
            });
            match (wanted, friendly) {
                (Some(t), _) => vec![t.id],
                (None, true) => vec![caster.id],
                (None, false) => Vec::new(),
            }
        }
        EffectScope::AlliesInRange(radius) => world
            .combatants()
            .into_iter()
            .filter(|c| {
                c.alive && c.team == caster.team && c.position.distance(caster.position) <= radius
            })
            .map(|c| c.id)
            .collect(),
        EffectScope::EnemiesInRange(radius) => world
            .combatants()
            .into_iter()
            .filter(|c| {
                c.alive
                    && c.is_enemy_of(caster)
                    && c.position.distance(caster.position) <= radius + c.radius
            })
            .map(|c| c.id)
            .collect(),
    }
}

/// Enemy closest to `point` within `range` of the caster. Ties go to the
/// first found.
fn nearest_enemy_to<W: CombatWorld + ?Sized>(
    world: &W,
    caster: &Combatant,
    point: Vec2,
    range: f64,
) -> Option<Combatant> {
    let mut best: Option<(f64, Combatant)> = None;
    for candidate in enemies(world, caster) {
        if candidate.gap_to(caster) > range {
            continue;
        }
        let d = candidate.position.distance(point);
        if best.map_or(true, |(best_d, _)| d < best_d) {
            best = Some((d, candidate));
        }
    }
    best.map(|(_, c)| c)
}

/// `point` pulled back to at most `range` from `origin`. A non-positive
/// range leaves the point alone.
fn clamp_to_range(origin: Vec2, point: Vec2, range: f64) -> Vec2 {
    let offset = point - origin;
    let length = offset.length();
    if range > 0.0 && length > range {
        origin + offset / length * range
    } else {
        point
    }
}

fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f64::EPSILON {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}
