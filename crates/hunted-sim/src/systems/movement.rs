//! Actor update system: status aging, cooldowns, regen and movement.

use hecs::World;

use hunted_core::actor::Actor;

pub fn run(world: &mut World, dt: f64) {
    for (_entity, actor) in world.query_mut::<&mut Actor>() {
        actor.update(dt);
    }
}
