//! Dome countdown.

use tracing::debug;

use hunted_core::events::GameEvent;

use crate::combat::Hazards;

pub fn run(hazards: &mut Hazards, events: &mut Vec<GameEvent>, dt: f64) {
    let Some(dome) = hazards.dome.as_mut() else {
        return;
    };
    dome.remaining -= dt;
    if dome.remaining <= 0.0 {
        debug!(owner = ?dome.owner, "dome collapsed");
        hazards.dome = None;
        events.push(GameEvent::DomeCollapsed);
    }
}
