#[cfg(test)]
mod tests {
    use hunted_core::ability::{Ability, EffectSpec, Magnitude};
    use hunted_core::actor::Actor;
    use hunted_core::enums::*;
    use hunted_core::events::GameEvent;
    use hunted_core::hazards::{Dome, Explosion, Projectile, Trap};
    use hunted_core::status::{Modifiers, StatusEffect};
    use hunted_core::types::{ActorId, Vec2};

    use crate::catalog::{AbilityCatalog, Archetype};
    use crate::dispatch::{is_supportive, use_ability};
    use crate::world::{CombatWorld, Combatant};

    const MAP_SIZE: f64 = 1000.0;

    /// Recording world backed by a plain actor list. Ids are list indices.
    #[derive(Default)]
    struct MockWorld {
        actors: Vec<Actor>,
        projectiles: Vec<Projectile>,
        explosions: Vec<Explosion>,
        traps: Vec<Trap>,
        dome: Option<Dome>,
        events: Vec<GameEvent>,
    }

    impl MockWorld {
        fn spawn(&mut self, actor: Actor) -> ActorId {
            let catalog = AbilityCatalog::standard();
            let archetype = match &actor.kind {
                hunted_core::actor::ActorKind::Hunter(h) => Some(Archetype::Hunter(h.role)),
                hunted_core::actor::ActorKind::Monster(m) => {
                    Some(Archetype::Monster(m.monster_type))
                }
                hunted_core::actor::ActorKind::Wildlife(_) => None,
            };
            let actor = match archetype {
                Some(a) => actor.with_abilities(catalog.loadout(a)),
                None => actor,
            };
            self.actors.push(actor);
            ActorId(self.actors.len() as u64 - 1)
        }

        fn get(&self, id: ActorId) -> &Actor {
            &self.actors[id.0 as usize]
        }

        fn get_mut(&mut self, id: ActorId) -> &mut Actor {
            &mut self.actors[id.0 as usize]
        }

        fn ability(&self, id: ActorId, slot: AbilitySlot) -> &Ability {
            &self.get(id).abilities[&slot]
        }
    }

    impl CombatWorld for MockWorld {
        fn combatant(&self, id: ActorId) -> Option<Combatant> {
            let actor = self.actors.get(id.0 as usize)?;
            Some(Combatant {
                id,
                team: actor.team(),
                position: actor.position,
                radius: actor.radius,
                facing: actor.facing,
                alive: actor.alive,
                downed: actor.downed,
                damage: actor.damage,
                damage_multiplier: actor.damage_multiplier(),
            })
        }

        fn combatants(&self) -> Vec<Combatant> {
            (0..self.actors.len())
                .filter_map(|i| self.combatant(ActorId(i as u64)))
                .collect()
        }

        fn activate(&mut self, user: ActorId, slot: AbilitySlot) -> Option<Ability> {
            self.actors.get_mut(user.0 as usize)?.try_activate(slot)
        }

        fn constrain(&self, point: Vec2, radius: f64) -> Vec2 {
            Vec2::new(
                point.x.clamp(radius, MAP_SIZE - radius),
                point.y.clamp(radius, MAP_SIZE - radius),
            )
        }

        fn damage(&mut self, target: ActorId, amount: f64, _source: Option<ActorId>) -> f64 {
            self.get_mut(target).take_damage(amount).dealt
        }

        fn heal(&mut self, target: ActorId, amount: f64) -> f64 {
            self.get_mut(target).heal(amount)
        }

        fn add_buff(&mut self, target: ActorId, effect: StatusEffect) {
            self.get_mut(target).add_buff(effect);
        }

        fn add_debuff(&mut self, target: ActorId, effect: StatusEffect) {
            self.get_mut(target).add_debuff(effect);
        }

        fn revive(&mut self, target: ActorId) -> bool {
            let actor = self.get_mut(target);
            if !actor.downed {
                return false;
            }
            actor.revive();
            true
        }

        fn displace(&mut self, target: ActorId, to: Vec2) {
            self.get_mut(target).position = to;
        }

        fn spawn_projectile(&mut self, projectile: Projectile) {
            self.projectiles.push(projectile);
        }

        fn spawn_explosion(&mut self, explosion: Explosion) {
            self.explosions.push(explosion);
        }

        fn spawn_trap(&mut self, trap: Trap) {
            self.traps.push(trap);
        }

        fn spawn_dome(&mut self, dome: Dome) {
            self.dome = Some(dome);
        }

        fn notify(&mut self, event: GameEvent) {
            self.events.push(event);
        }
    }

    fn hunter(world: &mut MockWorld, role: HunterRole, x: f64, y: f64) -> ActorId {
        world.spawn(Actor::hunter(role, format!("{role:?}"), Vec2::new(x, y)))
    }

    fn monster(world: &mut MockWorld, monster_type: MonsterType, x: f64, y: f64) -> ActorId {
        world.spawn(Actor::monster(monster_type, "monster", Vec2::new(x, y)))
    }

    // ---- Gating ----

    #[test]
    fn test_cast_refused_without_energy() {
        let mut world = MockWorld::default();
        let id = hunter(&mut world, HunterRole::Assault, 100.0, 100.0);
        world.get_mut(id).energy = 5.0;

        let cast = use_ability(&mut world, id, AbilitySlot::Secondary, None, Vec2::new(300.0, 100.0));
        assert!(!cast);
        assert!(world.projectiles.is_empty());
        assert!(world.events.is_empty());
        assert_eq!(world.get(id).energy, 5.0);
        assert_eq!(world.ability(id, AbilitySlot::Secondary).current_cooldown, 0.0);
    }

    #[test]
    fn test_cast_refused_on_cooldown_and_when_dead() {
        let mut world = MockWorld::default();
        let id = hunter(&mut world, HunterRole::Assault, 100.0, 100.0);
        let aim = Vec2::new(300.0, 100.0);
        assert!(use_ability(&mut world, id, AbilitySlot::Primary, None, aim));
        assert!(!use_ability(&mut world, id, AbilitySlot::Primary, None, aim));
        assert_eq!(world.projectiles.len(), 1);

        world.get_mut(id).take_damage(10_000.0);
        world.get_mut(id).abilities.values_mut().for_each(|a| a.tick(100.0));
        assert!(!use_ability(&mut world, id, AbilitySlot::Primary, None, aim));
        assert_eq!(world.projectiles.len(), 1);
    }

    #[test]
    fn test_unknown_slot_is_a_no_op() {
        let mut world = MockWorld::default();
        let id = hunter(&mut world, HunterRole::Medic, 100.0, 100.0);
        assert!(!use_ability(&mut world, id, AbilitySlot::Ability4, None, Vec2::ZERO));
        assert!(!use_ability(&mut world, ActorId(99), AbilitySlot::Primary, None, Vec2::ZERO));
    }

    // ---- Projectiles ----

    #[test]
    fn test_projectile_cast_pays_and_spawns() {
        let mut world = MockWorld::default();
        let id = hunter(&mut world, HunterRole::Assault, 100.0, 100.0);

        assert!(use_ability(&mut world, id, AbilitySlot::Primary, None, Vec2::new(300.0, 100.0)));
        let ability = world.ability(id, AbilitySlot::Primary);
        assert_eq!(ability.current_cooldown, ability.cooldown);

        assert_eq!(world.projectiles.len(), 1);
        let shot = &world.projectiles[0];
        assert_eq!(shot.owner, id);
        assert_eq!(shot.owner_team, Team::Hunters);
        assert_eq!(shot.damage, 8.0);
        assert!((shot.position - Vec2::new(118.0, 100.0)).length() < 1e-9);
        assert!((shot.velocity - Vec2::new(700.0, 0.0)).length() < 1e-9);
        assert!(matches!(
            world.events[0],
            GameEvent::AbilityUsed {
                slot: AbilitySlot::Primary,
                ability: "assault_rifle",
                ..
            }
        ));
    }

    #[test]
    fn test_projectile_follows_live_target_over_aim() {
        let mut world = MockWorld::default();
        let shooter = hunter(&mut world, HunterRole::Medic, 100.0, 100.0);
        let target = monster(&mut world, MonsterType::Phantom, 100.0, 400.0);

        assert!(use_ability(
            &mut world,
            shooter,
            AbilitySlot::Secondary,
            Some(target),
            Vec2::new(900.0, 100.0),
        ));
        let shot = &world.projectiles[0];
        assert!(shot.velocity.x.abs() < 1e-9);
        assert!(shot.velocity.y > 0.0);
        assert!(shot.on_hit.is_some());
        assert_eq!(world.get(shooter).energy, 110.0);
    }

    // ---- Area, heal and support ----

    #[test]
    fn test_explosion_uses_damage_multiplier_and_range() {
        let mut world = MockWorld::default();
        let id = hunter(&mut world, HunterRole::Support, 100.0, 100.0);
        let rage = Modifiers {
            damage_multiplier: 1.5,
            ..Modifiers::default()
        };
        world
            .get_mut(id)
            .add_buff(StatusEffect::new(StatusId::Rage, 10.0, rage));

        assert!(use_ability(&mut world, id, AbilitySlot::Ability1, None, Vec2::new(900.0, 100.0)));
        let blast = world.explosions[0];
        assert_eq!(blast.damage, 90.0);
        assert!((blast.position - Vec2::new(700.0, 100.0)).length() < 1e-9);
        assert_eq!(blast.source, Some(id));
    }

    #[test]
    fn test_heal_reaches_allies_in_radius_only() {
        let mut world = MockWorld::default();
        let medic = hunter(&mut world, HunterRole::Medic, 100.0, 100.0);
        let near = hunter(&mut world, HunterRole::Assault, 250.0, 100.0);
        let far = hunter(&mut world, HunterRole::Trapper, 400.0, 100.0);
        let enemy = monster(&mut world, MonsterType::Behemoth, 120.0, 100.0);
        for id in [medic, near, far, enemy] {
            world.get_mut(id).health = 50.0;
        }

        assert!(use_ability(&mut world, medic, AbilitySlot::Ability1, None, Vec2::ZERO));
        assert_eq!(world.get(medic).health, 90.0);
        assert_eq!(world.get(near).health, 90.0);
        assert_eq!(world.get(far).health, 50.0);
        assert_eq!(world.get(enemy).health, 50.0);
    }

    #[test]
    fn test_heal_polarity_on_melee_deals_no_damage() {
        let mut world = MockWorld::default();
        let beast = monster(&mut world, MonsterType::Behemoth, 100.0, 100.0);
        let front = hunter(&mut world, HunterRole::Assault, 150.0, 100.0);
        world.get_mut(front).health = 50.0;
        if let Some(maul) = world.get_mut(beast).abilities.get_mut(&AbilitySlot::Primary) {
            maul.magnitude = Magnitude::from_signed(-15.0);
        }

        assert!(use_ability(&mut world, beast, AbilitySlot::Primary, None, Vec2::new(200.0, 100.0)));
        assert_eq!(world.get(front).health, 50.0);
        // The shove still lands.
        assert!((world.get(front).position.x - 170.0).abs() < 1e-9);
    }

    #[test]
    fn test_damage_polarity_on_heal_restores_nothing() {
        let mut world = MockWorld::default();
        let medic = hunter(&mut world, HunterRole::Medic, 100.0, 100.0);
        let near = hunter(&mut world, HunterRole::Assault, 250.0, 100.0);
        for id in [medic, near] {
            world.get_mut(id).health = 50.0;
        }
        if let Some(burst) = world.get_mut(medic).abilities.get_mut(&AbilitySlot::Ability1) {
            burst.magnitude = Magnitude::damage(40.0);
        }

        assert!(use_ability(&mut world, medic, AbilitySlot::Ability1, None, Vec2::ZERO));
        assert_eq!(world.get(medic).health, 50.0);
        assert_eq!(world.get(near).health, 50.0);
    }

    #[test]
    fn test_heal_polarity_projectile_carries_no_damage() {
        let mut world = MockWorld::default();
        let id = hunter(&mut world, HunterRole::Assault, 100.0, 100.0);
        if let Some(rifle) = world.get_mut(id).abilities.get_mut(&AbilitySlot::Primary) {
            rifle.magnitude = Magnitude::heal(8.0);
        }

        assert!(use_ability(&mut world, id, AbilitySlot::Primary, None, Vec2::new(300.0, 100.0)));
        assert_eq!(world.projectiles[0].damage, 0.0);
    }

    #[test]
    fn test_shield_projector_falls_back_to_caster() {
        let mut world = MockWorld::default();
        let support = hunter(&mut world, HunterRole::Support, 100.0, 100.0);
        let distant = hunter(&mut world, HunterRole::Assault, 700.0, 100.0);
        let close = hunter(&mut world, HunterRole::Medic, 200.0, 100.0);

        assert!(use_ability(&mut world, support, AbilitySlot::Secondary, Some(distant), Vec2::ZERO));
        assert!(world.get(support).buffs.contains(StatusId::Shield));
        assert!(!world.get(distant).buffs.contains(StatusId::Shield));

        world.get_mut(support).abilities.values_mut().for_each(|a| a.tick(100.0));
        assert!(use_ability(&mut world, support, AbilitySlot::Secondary, Some(close), Vec2::ZERO));
        assert!(world.get(close).buffs.contains(StatusId::Shield));
    }

    #[test]
    fn test_cloak_field_covers_nearby_allies() {
        let mut world = MockWorld::default();
        let support = hunter(&mut world, HunterRole::Support, 100.0, 100.0);
        let near = hunter(&mut world, HunterRole::Assault, 200.0, 100.0);
        let far = hunter(&mut world, HunterRole::Trapper, 900.0, 100.0);

        assert!(use_ability(&mut world, support, AbilitySlot::Ability2, None, Vec2::ZERO));
        assert!(world.get(support).is_invisible());
        assert!(world.get(near).is_invisible());
        assert!(!world.get(far).is_invisible());
    }

    #[test]
    fn test_undertow_slows_enemies_in_range() {
        let mut world = MockWorld::default();
        let levi = monster(&mut world, MonsterType::Leviathan, 500.0, 500.0);
        let near = hunter(&mut world, HunterRole::Assault, 600.0, 500.0);
        let far = hunter(&mut world, HunterRole::Medic, 900.0, 500.0);

        assert!(use_ability(&mut world, levi, AbilitySlot::Ability1, None, Vec2::ZERO));
        assert!(world.get(near).debuffs.contains(StatusId::Slow));
        assert!(!world.get(far).debuffs.contains(StatusId::Slow));
        assert!(world.get(levi).debuffs.is_empty());
    }

    #[test]
    fn test_revive_pulse_raises_downed_ally() {
        let mut world = MockWorld::default();
        let medic = hunter(&mut world, HunterRole::Medic, 100.0, 100.0);
        let fallen = hunter(&mut world, HunterRole::Assault, 150.0, 100.0);
        world.get_mut(fallen).take_damage(10_000.0);

        assert!(use_ability(&mut world, medic, AbilitySlot::Ability2, None, Vec2::ZERO));
        let fallen = world.get(fallen);
        assert!(fallen.alive);
        assert_eq!(fallen.health, fallen.max_health * 0.5);
    }

    // ---- Hazards ----

    #[test]
    fn test_trap_placed_within_range() {
        let mut world = MockWorld::default();
        let id = hunter(&mut world, HunterRole::Trapper, 100.0, 100.0);

        assert!(use_ability(&mut world, id, AbilitySlot::Ability2, None, Vec2::new(600.0, 100.0)));
        let trap = &world.traps[0];
        assert!((trap.position - Vec2::new(250.0, 100.0)).length() < 1e-9);
        assert_eq!(trap.damage, 20.0);
        assert_eq!(trap.effect_duration, 2.5);
        assert_eq!(trap.kind, TrapKind::Immobilize);
        assert!(!trap.triggered);
    }

    #[test]
    fn test_dome_spawns_on_caster() {
        let mut world = MockWorld::default();
        let id = hunter(&mut world, HunterRole::Trapper, 300.0, 300.0);

        assert!(use_ability(&mut world, id, AbilitySlot::Ability1, None, Vec2::ZERO));
        let dome = world.dome.expect("dome raised");
        assert_eq!(dome.position, Vec2::new(300.0, 300.0));
        assert_eq!(dome.radius, 400.0);
        assert_eq!(dome.remaining, 20.0);
        assert_eq!(world.get(id).energy, 60.0);
    }

    // ---- Melee and movement ----

    #[test]
    fn test_cone_hits_only_in_front() {
        let mut world = MockWorld::default();
        let beast = monster(&mut world, MonsterType::Behemoth, 100.0, 100.0);
        let front = hunter(&mut world, HunterRole::Assault, 150.0, 100.0);
        let behind = hunter(&mut world, HunterRole::Assault, 50.0, 100.0);

        assert!(use_ability(&mut world, beast, AbilitySlot::Primary, None, Vec2::new(200.0, 100.0)));
        // (15 + 6 melee stat) through armor 20
        let front_actor = world.get(front);
        assert!((front_actor.max_health - front_actor.health - 16.8).abs() < 1e-9);
        assert!((front_actor.position.x - 170.0).abs() < 1e-9);
        assert_eq!(world.get(behind).health, world.get(behind).max_health);
    }

    #[test]
    fn test_blink_limited_by_range() {
        let mut world = MockWorld::default();
        let id = monster(&mut world, MonsterType::Phantom, 100.0, 100.0);
        assert!(use_ability(&mut world, id, AbilitySlot::Ability2, None, Vec2::new(900.0, 100.0)));
        assert!((world.get(id).position - Vec2::new(400.0, 100.0)).length() < 1e-9);
    }

    #[test]
    fn test_leap_strikes_landing_zone() {
        let mut world = MockWorld::default();
        let beast = monster(&mut world, MonsterType::Behemoth, 100.0, 100.0);
        let prey = hunter(&mut world, HunterRole::Assault, 300.0, 100.0);

        assert!(use_ability(&mut world, beast, AbilitySlot::Ability2, Some(prey), Vec2::ZERO));
        assert_eq!(world.get(beast).position, Vec2::new(300.0, 100.0));
        let prey = world.get(prey);
        assert!((prey.max_health - prey.health - 28.8).abs() < 1e-9);
    }

    #[test]
    fn test_charge_hits_along_path() {
        let mut world = MockWorld::default();
        let beast = monster(&mut world, MonsterType::Behemoth, 100.0, 100.0);
        let on_path = hunter(&mut world, HunterRole::Medic, 250.0, 120.0);
        let off_path = hunter(&mut world, HunterRole::Medic, 250.0, 300.0);

        assert!(use_ability(&mut world, beast, AbilitySlot::Ability3, None, Vec2::new(450.0, 100.0)));
        assert!(world.get(on_path).health < world.get(on_path).max_health);
        assert_eq!(world.get(off_path).health, world.get(off_path).max_health);
        assert!((world.get(beast).position - Vec2::new(450.0, 100.0)).length() < 1e-9);
    }

    #[test]
    fn test_pull_drags_target_toward_caster() {
        let mut world = MockWorld::default();
        let levi = monster(&mut world, MonsterType::Leviathan, 100.0, 100.0);
        let prey = hunter(&mut world, HunterRole::Assault, 400.0, 100.0);

        assert!(use_ability(&mut world, levi, AbilitySlot::Ability3, Some(prey), Vec2::ZERO));
        let prey = world.get(prey);
        assert!((prey.position - Vec2::new(250.0, 100.0)).length() < 1e-9);
        assert!((prey.max_health - prey.health - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_casting_breaks_stealth() {
        let mut world = MockWorld::default();
        let id = monster(&mut world, MonsterType::Phantom, 100.0, 100.0);
        assert!(use_ability(&mut world, id, AbilitySlot::Ability1, None, Vec2::ZERO));
        assert!(world.get(id).is_invisible());
        assert!(use_ability(&mut world, id, AbilitySlot::Primary, None, Vec2::new(200.0, 100.0)));
        assert!(!world.get(id).is_invisible());
    }

    // ---- Catalog ----

    #[test]
    fn test_catalog_covers_every_archetype() {
        let catalog = AbilityCatalog::standard();
        let mut archetypes: Vec<Archetype> =
            HunterRole::ALL.iter().map(|r| Archetype::Hunter(*r)).collect();
        archetypes.extend(
            [MonsterType::Behemoth, MonsterType::Leviathan, MonsterType::Phantom]
                .map(Archetype::Monster),
        );

        for archetype in archetypes {
            let slots = catalog.slots(archetype);
            assert!(slots.contains(&AbilitySlot::Primary), "{archetype:?}");
            assert!(slots.contains(&AbilitySlot::Secondary), "{archetype:?}");
            assert!(slots.iter().filter(|s| s.is_special()).count() >= 2);
            for (_, ability) in catalog.loadout(archetype) {
                assert_eq!(ability.level, 1);
                assert_eq!(ability.current_cooldown, 0.0);
                assert!(ability.cooldown > 0.0, "{}", ability.id);
            }
        }
    }

    #[test]
    fn test_loadouts_are_independent() {
        let catalog = AbilityCatalog::standard();
        let archetype = Archetype::Monster(MonsterType::Behemoth);
        let mut first = catalog.loadout(archetype);
        let second = catalog.loadout(archetype);

        if let Some(maul) = first.get_mut(&AbilitySlot::Primary) {
            maul.upgrade();
            maul.current_cooldown = 0.5;
        }
        assert_eq!(second[&AbilitySlot::Primary].level, 1);
        assert_eq!(second[&AbilitySlot::Primary].current_cooldown, 0.0);
        let template = catalog.template(archetype, AbilitySlot::Primary);
        assert_eq!(template.map(|t| t.max_level), Some(3));
    }

    #[test]
    fn test_supportive_effects() {
        let catalog = AbilityCatalog::standard();
        let effect = |archetype, slot| -> EffectSpec {
            catalog
                .template(archetype, slot)
                .map(|t| t.effect.clone())
                .expect("template")
        };
        let medic = Archetype::Hunter(HunterRole::Medic);
        let support = Archetype::Hunter(HunterRole::Support);
        let assault = Archetype::Hunter(HunterRole::Assault);
        assert!(is_supportive(&effect(medic, AbilitySlot::Ability1)));
        assert!(is_supportive(&effect(support, AbilitySlot::Secondary)));
        assert!(!is_supportive(&effect(assault, AbilitySlot::Ability1)));
        assert!(!is_supportive(&effect(
            Archetype::Monster(MonsterType::Behemoth),
            AbilitySlot::Primary
        )));
    }
}
