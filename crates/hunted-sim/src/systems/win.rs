//! Win conditions, in priority order.

use hecs::World;

use hunted_core::actor::Actor;
use hunted_core::enums::{MatchOutcome, Team};

/// Monster dead first, then no hunter standing. The timeout is checked by
/// the engine at the start of the tick.
pub fn evaluate(world: &World) -> Option<MatchOutcome> {
    let mut monster_alive = false;
    let mut hunters_alive = 0usize;
    for (_entity, actor) in world.query::<&Actor>().iter() {
        match actor.team() {
            Team::Monster => monster_alive |= actor.alive,
            Team::Hunters if actor.alive => hunters_alive += 1,
            _ => {}
        }
    }

    if !monster_alive {
        Some(MatchOutcome::HuntersWin)
    } else if hunters_alive == 0 {
        Some(MatchOutcome::MonsterWinsByElimination)
    } else {
        None
    }
}
