//! Monster think ladder.
//!
//! Each rung short-circuits. Distances are center to center.

use rand::Rng;

use hunted_core::constants::*;
use hunted_core::enums::Team;

use crate::context::AiContext;
use crate::fsm::Decision;
use crate::profiles::DifficultyProfile;

pub fn think<R: Rng + ?Sized>(
    ctx: &AiContext,
    difficulty: &DifficultyProfile,
    rng: &mut R,
) -> Decision {
    let me = &ctx.me;
    let hunter = ctx.nearest(Team::Hunters);
    let prey = ctx.nearest(Team::Wildlife);
    let stage = me.evolution_stage;

    // 1. Wounded: get away, or eat to heal up through evolution.
    if me.health_fraction() < MONSTER_FLEE_HEALTH_FRACTION && stage < MAX_EVOLUTION_STAGE {
        if let Some((h, d)) = hunter {
            if d < MONSTER_FLEE_SCAN_RANGE {
                return Decision::flee(h.id);
            }
        }
        if let Some((w, _)) = prey {
            return Decision::feed(w.id);
        }
    }

    match stage {
        // 2. Stage 1: mostly a forager.
        0 | 1 => {
            if let Some((h, d)) = hunter {
                if d < MONSTER_STAGE1_ENGAGE_RANGE {
                    return if rng.gen::<f64>() < difficulty.aggressiveness {
                        Decision::attack(h.id)
                    } else {
                        Decision::flee(h.id)
                    };
                }
            }
            match prey {
                Some((w, d)) if d < MONSTER_STAGE1_FEED_RANGE => Decision::feed(w.id),
                _ => Decision::patrol(),
            }
        }
        // 3. Stage 2: opportunistic.
        2 => {
            if let Some((h, d)) = hunter {
                if d < MONSTER_STAGE2_ENGAGE_RANGE && rng.gen::<f64>() < difficulty.aggressiveness {
                    return Decision::attack(h.id);
                }
            }
            if me.evolution_fraction < MONSTER_STAGE2_FEED_UNTIL {
                if let Some((w, _)) = prey {
                    return Decision::feed(w.id);
                }
            }
            match hunter {
                Some((h, _)) => Decision::chase(h.id),
                None => Decision::patrol(),
            }
        }
        // 4. Stage 3: hunts.
        _ => match hunter {
            Some((h, d)) if d < MONSTER_STAGE3_ATTACK_RANGE => Decision::attack(h.id),
            Some((h, _)) => Decision::chase(h.id),
            None => Decision::patrol(),
        },
    }
}
