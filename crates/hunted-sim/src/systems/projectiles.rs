//! Projectile system: advance, then resolve each projectile's single
//! terminal event (expiry, leaving the map, obstacle, or actor hit).

use hunted_abilities::world::{CombatWorld, Combatant};
use hunted_core::hazards::{OnHit, Projectile};
use hunted_core::types::direction;

use crate::combat::Combat;

pub fn run(combat: &mut Combat, dt: f64) {
    let in_flight = std::mem::take(&mut combat.hazards.projectiles);
    let mut survivors = Vec::with_capacity(in_flight.len());

    for mut projectile in in_flight {
        projectile.position += projectile.velocity * dt;
        projectile.life -= dt;

        if projectile.life <= 0.0 || !combat.terrain.in_bounds(projectile.position) {
            detonate(combat, &projectile);
            continue;
        }
        if combat
            .terrain
            .obstacle_collision(projectile.position, projectile.size)
            .is_some()
        {
            detonate(combat, &projectile);
            continue;
        }
        if let Some(victim) = first_hit(combat, &projectile) {
            strike(combat, &projectile, &victim);
            detonate(combat, &projectile);
            continue;
        }
        survivors.push(projectile);
    }

    // Anything spawned while resolving goes after the survivors.
    survivors.append(&mut combat.hazards.projectiles);
    combat.hazards.projectiles = survivors;
}

/// First living actor in roster order that is not the owner, not on the
/// owner's team, and within reach of the projectile.
fn first_hit(combat: &Combat, projectile: &Projectile) -> Option<Combatant> {
    combat.combatants().into_iter().find(|c| {
        c.id != projectile.owner
            && c.alive
            && c.team != projectile.owner_team
            && c.position.distance(projectile.position) <= c.radius + projectile.size
    })
}

/// Owner's damage multiplier at hit time. A vanished owner hits at 1.0.
fn owner_multiplier(combat: &Combat, projectile: &Projectile) -> f64 {
    combat
        .combatant(projectile.owner)
        .map_or(1.0, |owner| owner.damage_multiplier)
}

fn strike(combat: &mut Combat, projectile: &Projectile, victim: &Combatant) {
    let amount = projectile.damage * owner_multiplier(combat, projectile);
    combat.damage(victim.id, amount, Some(projectile.owner));

    let Some(on_hit) = &projectile.on_hit else {
        return;
    };
    let Some(victim) = combat.combatant(victim.id).filter(|c| c.alive) else {
        return;
    };
    match on_hit {
        OnHit::Debuff(status) => combat.add_debuff(victim.id, status.clone()),
        OnHit::Pull(distance) => {
            if let Some(owner) = combat.combatant(projectile.owner) {
                let travel = distance.min(victim.gap_to(&owner).max(0.0));
                let to = victim.position + direction(victim.position, owner.position) * travel;
                let to = combat.constrain(to, victim.radius);
                combat.displace(victim.id, to);
            }
        }
        OnHit::Knockback(distance) => {
            let push = projectile.velocity.normalize_or_zero() * *distance;
            let to = combat.constrain(victim.position + push, victim.radius);
            combat.displace(victim.id, to);
        }
    }
}

fn detonate(combat: &mut Combat, projectile: &Projectile) {
    if let Some(mut explosion) = projectile.detonation() {
        explosion.damage *= owner_multiplier(combat, projectile);
        combat.spawn_explosion(explosion);
    }
}
