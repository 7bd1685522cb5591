//! Spawn factories: hunters, the monster and wildlife, each with the
//! component bundle the systems expect.

use hecs::{Entity, EntityBuilder, World};
use rand::Rng;

use hunted_abilities::catalog::{AbilityCatalog, Archetype};
use hunted_ai::fsm::AiController;
use hunted_ai::profiles::Brain;
use hunted_core::actor::Actor;
use hunted_core::enums::{HunterRole, MonsterType, Species};
use hunted_core::types::Vec2;
use hunted_terrain::{SpawnSet, Terrain};

use crate::components::{CombatStats, PlayerControlled};
use crate::config::{MatchConfig, PlayerSlot};

/// Spawn the full cast for a match, hunters first, then the monster, then
/// wildlife. Roster order follows spawn order.
pub fn populate<R: Rng + ?Sized>(
    world: &mut World,
    roster: &mut Vec<Entity>,
    terrain: &dyn Terrain,
    catalog: &AbilityCatalog,
    config: &MatchConfig,
    rng: &mut R,
) {
    let center = Vec2::new(terrain.width() / 2.0, terrain.height() / 2.0);

    let hunter_spawns = terrain.spawn_points(SpawnSet::Hunters);
    let mut player_taken = false;
    for (i, &role) in config.hunters.iter().enumerate() {
        let position = pick(hunter_spawns, i).unwrap_or(center);
        let is_player = !player_taken && config.player == PlayerSlot::Hunter(role);
        player_taken |= is_player;
        let controller = (!is_player).then(|| controller(Brain::Hunter(role), config));
        spawn_hunter(world, roster, catalog, role, position, controller);
    }

    let position = pick(terrain.spawn_points(SpawnSet::Monster), 0).unwrap_or(center);
    let controller =
        (config.player != PlayerSlot::Monster).then(|| controller(Brain::Monster(config.monster), config));
    spawn_monster(world, roster, catalog, config.monster, position, controller);

    let wildlife_spawns = terrain.spawn_points(SpawnSet::Wildlife);
    for i in 0..config.wildlife_count {
        let position = pick(wildlife_spawns, i).unwrap_or_else(|| random_point(terrain, rng));
        spawn_wildlife(world, roster, random_species(rng), position);
    }
}

fn controller(brain: Brain, config: &MatchConfig) -> AiController {
    AiController::new(brain, config.difficulty).with_think_interval(config.think_interval_secs)
}

/// Cycle through a spawn set.
fn pick(points: &[Vec2], index: usize) -> Option<Vec2> {
    if points.is_empty() {
        None
    } else {
        Some(points[index % points.len()])
    }
}

/// Spawn a hunter. `None` for the controller makes it the player actor.
pub fn spawn_hunter(
    world: &mut World,
    roster: &mut Vec<Entity>,
    catalog: &AbilityCatalog,
    role: HunterRole,
    position: Vec2,
    controller: Option<AiController>,
) -> Entity {
    let actor = Actor::hunter(role, role.class_id(), position)
        .with_abilities(catalog.loadout(Archetype::Hunter(role)));
    spawn(world, roster, actor, controller)
}

/// Spawn the monster. `None` for the controller makes it the player actor.
pub fn spawn_monster(
    world: &mut World,
    roster: &mut Vec<Entity>,
    catalog: &AbilityCatalog,
    monster_type: MonsterType,
    position: Vec2,
    controller: Option<AiController>,
) -> Entity {
    let name = match monster_type {
        MonsterType::Behemoth => "behemoth",
        MonsterType::Leviathan => "leviathan",
        MonsterType::Phantom => "phantom",
    };
    let actor = Actor::monster(monster_type, name, position)
        .with_abilities(catalog.loadout(Archetype::Monster(monster_type)));
    spawn(world, roster, actor, controller)
}

/// Spawn one wildlife animal. Wildlife has no controller; the wildlife
/// system steers it.
pub fn spawn_wildlife(
    world: &mut World,
    roster: &mut Vec<Entity>,
    species: Species,
    position: Vec2,
) -> Entity {
    let name = match species {
        Species::Crawler => "crawler",
        Species::Grazer => "grazer",
        Species::Tusker => "tusker",
    };
    let entity = world.spawn((Actor::wildlife(species, name, position), CombatStats::default()));
    roster.push(entity);
    entity
}

fn spawn(
    world: &mut World,
    roster: &mut Vec<Entity>,
    actor: Actor,
    controller: Option<AiController>,
) -> Entity {
    let mut builder = EntityBuilder::new();
    builder.add(actor).add(CombatStats::default());
    match controller {
        Some(controller) => builder.add(controller),
        None => builder.add(PlayerControlled),
    };
    let entity = world.spawn(builder.build());
    roster.push(entity);
    entity
}

/// Grazers are common, tuskers rare.
pub fn random_species<R: Rng + ?Sized>(rng: &mut R) -> Species {
    match rng.gen_range(0..10) {
        0..=4 => Species::Grazer,
        5..=7 => Species::Crawler,
        _ => Species::Tusker,
    }
}

pub fn random_point<R: Rng + ?Sized>(terrain: &dyn Terrain, rng: &mut R) -> Vec2 {
    Vec2::new(
        rng.gen_range(0.0..=terrain.width()),
        rng.gen_range(0.0..=terrain.height()),
    )
}
