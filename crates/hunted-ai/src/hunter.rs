//! Hunter think logic, dispatched by role.

use rand::Rng;

use hunted_core::constants::*;
use hunted_core::enums::{HunterRole, Team};

use crate::context::AiContext;
use crate::fsm::Decision;
use crate::profiles::{get_profile, Brain, DifficultyProfile};

pub fn think<R: Rng + ?Sized>(
    role: HunterRole,
    ctx: &AiContext,
    difficulty: &DifficultyProfile,
    rng: &mut R,
) -> Decision {
    let profile = get_profile(Brain::Hunter(role));
    let monster = ctx.nearest(Team::Monster);

    if let (Some(threshold), Some((m, _))) = (profile.flee_below, monster) {
        if ctx.me.health_fraction() < threshold {
            return Decision::flee(m.id);
        }
    }

    match role {
        HunterRole::Medic => {
            let can_revive = ctx.me.abilities.iter().any(|a| a.revives && a.ready);
            if let Some(ally) = ctx.downed_ally().filter(|_| can_revive) {
                return Decision::heal(ally.id);
            }
            if let Some(ally) = ctx.most_injured_ally(MEDIC_HEAL_THRESHOLD) {
                return Decision::heal(ally.id);
            }
        }
        HunterRole::Support => {
            if let Some(ally) = ctx.most_injured_ally(SUPPORT_SHIELD_THRESHOLD) {
                if rng.gen::<f64>() < difficulty.teamwork {
                    return Decision::support(ally.id);
                }
            }
        }
        HunterRole::Assault | HunterRole::Trapper => {}
    }

    match monster {
        Some((m, d)) if d <= profile.optimal_range + HUNTER_ENGAGE_MARGIN => Decision::attack(m.id),
        Some((m, _)) => Decision::chase(m.id),
        None => Decision::patrol(),
    }
}
