#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use hunted_core::constants::HUNTER_ENGAGE_MARGIN;
    use hunted_core::enums::{AbilityCategory, AbilitySlot, AiState, Difficulty, HunterRole, MonsterType, Team};
    use hunted_core::types::{ActorId, Vec2};

    use crate::context::{AbilityInfo, AiContext, Contact, SelfView};
    use crate::fsm::{AiController, Decision};
    use crate::profiles::{get_difficulty, Brain, DifficultyProfile};
    use crate::{hunter, monster};

    const ME: ActorId = ActorId(0);

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn ability(slot: AbilitySlot, range: f64, category: AbilityCategory) -> AbilityInfo {
        AbilityInfo {
            slot,
            range,
            category,
            supportive: matches!(category, AbilityCategory::Heal | AbilityCategory::Buff),
            revives: false,
            ready: true,
        }
    }

    fn monster_kit() -> Vec<AbilityInfo> {
        vec![
            ability(AbilitySlot::Primary, 70.0, AbilityCategory::Damage),
            ability(AbilitySlot::Secondary, 500.0, AbilityCategory::Projectile),
            ability(AbilitySlot::Ability1, 180.0, AbilityCategory::Area),
        ]
    }

    fn me_monster(stage: u8, health_fraction: f64, evolution: f64) -> SelfView {
        SelfView {
            id: ME,
            team: Team::Monster,
            position: Vec2::new(1000.0, 1000.0),
            radius: 28.0,
            health: 500.0 * health_fraction,
            max_health: 500.0,
            evolution_stage: stage,
            evolution_fraction: evolution,
            abilities: monster_kit(),
        }
    }

    fn me_hunter(health_fraction: f64, abilities: Vec<AbilityInfo>) -> SelfView {
        SelfView {
            id: ME,
            team: Team::Hunters,
            position: Vec2::new(1000.0, 1000.0),
            radius: 14.0,
            health: 100.0 * health_fraction,
            max_health: 100.0,
            evolution_stage: 1,
            evolution_fraction: 0.0,
            abilities,
        }
    }

    /// Contact placed `dx` units east of the controlled actor.
    fn contact(id: u64, team: Team, dx: f64) -> Contact {
        Contact {
            id: ActorId(id),
            team,
            position: Vec2::new(1000.0 + dx, 1000.0),
            radius: 14.0,
            health: 100.0,
            max_health: 100.0,
            alive: true,
            downed: false,
            invisible: false,
        }
    }

    fn profile(aggressiveness: f64, teamwork: f64) -> DifficultyProfile {
        DifficultyProfile {
            aggressiveness,
            accuracy: 1.0,
            reaction_time: 1.0,
            special_rate: 0.0,
            teamwork,
        }
    }

    fn context(me: SelfView, contacts: &[Contact]) -> AiContext<'_> {
        AiContext {
            me,
            contacts,
            map_size: Vec2::new(2400.0, 1800.0),
            dt: 0.1,
        }
    }

    // ---- Monster ladder ----

    #[test]
    fn test_wounded_monster_flees_close_hunter() {
        let contacts = [contact(1, Team::Hunters, 180.0), contact(2, Team::Wildlife, 50.0)];
        let ctx = context(me_monster(1, 0.2, 0.0), &contacts);
        let decision = monster::think(&ctx, &profile(1.0, 0.0), &mut rng());
        assert_eq!(decision, Decision::flee(ActorId(1)));
    }

    #[test]
    fn test_wounded_monster_feeds_when_hunters_far() {
        let contacts = [contact(1, Team::Hunters, 400.0), contact(2, Team::Wildlife, 600.0)];
        let ctx = context(me_monster(2, 0.2, 0.0), &contacts);
        let decision = monster::think(&ctx, &profile(1.0, 0.0), &mut rng());
        assert_eq!(decision, Decision::feed(ActorId(2)));
    }

    #[test]
    fn test_wounded_stage3_monster_keeps_fighting() {
        let contacts = [contact(1, Team::Hunters, 90.0)];
        let ctx = context(me_monster(3, 0.1, 0.0), &contacts);
        let decision = monster::think(&ctx, &profile(0.0, 0.0), &mut rng());
        assert_eq!(decision, Decision::attack(ActorId(1)));
    }

    #[test]
    fn test_stage1_fight_or_flight_roll() {
        let contacts = [contact(1, Team::Hunters, 100.0)];
        let ctx = context(me_monster(1, 1.0, 0.0), &contacts);
        assert_eq!(
            monster::think(&ctx, &profile(1.0, 0.0), &mut rng()),
            Decision::attack(ActorId(1))
        );
        assert_eq!(
            monster::think(&ctx, &profile(0.0, 0.0), &mut rng()),
            Decision::flee(ActorId(1))
        );
    }

    #[test]
    fn test_stage1_forages_then_patrols() {
        let near = [contact(1, Team::Hunters, 500.0), contact(2, Team::Wildlife, 250.0)];
        let ctx = context(me_monster(1, 1.0, 0.0), &near);
        assert_eq!(
            monster::think(&ctx, &profile(1.0, 0.0), &mut rng()),
            Decision::feed(ActorId(2))
        );

        let far = [contact(1, Team::Hunters, 500.0), contact(2, Team::Wildlife, 400.0)];
        let ctx = context(me_monster(1, 1.0, 0.0), &far);
        assert_eq!(
            monster::think(&ctx, &profile(1.0, 0.0), &mut rng()),
            Decision::patrol()
        );
    }

    #[test]
    fn test_stage2_feeds_until_eighty_percent() {
        let contacts = [contact(1, Team::Hunters, 200.0), contact(2, Team::Wildlife, 900.0)];

        let hungry = context(me_monster(2, 1.0, 0.5), &contacts);
        assert_eq!(
            monster::think(&hungry, &profile(0.0, 0.0), &mut rng()),
            Decision::feed(ActorId(2))
        );

        let sated = context(me_monster(2, 1.0, 0.9), &contacts);
        assert_eq!(
            monster::think(&sated, &profile(0.0, 0.0), &mut rng()),
            Decision::chase(ActorId(1))
        );

        assert_eq!(
            monster::think(&sated, &profile(1.0, 0.0), &mut rng()),
            Decision::attack(ActorId(1))
        );
    }

    #[test]
    fn test_stage3_chases_or_attacks() {
        let far = [contact(1, Team::Hunters, 150.0)];
        let ctx = context(me_monster(3, 1.0, 0.0), &far);
        assert_eq!(
            monster::think(&ctx, &profile(0.0, 0.0), &mut rng()),
            Decision::chase(ActorId(1))
        );

        let none: [Contact; 0] = [];
        let ctx = context(me_monster(3, 1.0, 0.0), &none);
        assert_eq!(
            monster::think(&ctx, &profile(0.0, 0.0), &mut rng()),
            Decision::patrol()
        );
    }

    #[test]
    fn test_nearest_tie_goes_to_first_found() {
        let contacts = [
            contact(5, Team::Hunters, 90.0),
            contact(3, Team::Hunters, -90.0),
        ];
        let ctx = context(me_monster(3, 1.0, 0.0), &contacts);
        assert_eq!(
            monster::think(&ctx, &profile(0.0, 0.0), &mut rng()),
            Decision::attack(ActorId(5))
        );
    }

    #[test]
    fn test_invisible_hunters_only_seen_up_close() {
        let mut hidden = contact(1, Team::Hunters, 90.0);
        hidden.invisible = true;
        let visible = contact(2, Team::Hunters, 95.0);
        let contacts = [hidden, visible];
        let ctx = context(me_monster(3, 1.0, 0.0), &contacts);
        assert_eq!(ctx.nearest(Team::Hunters).map(|(c, _)| c.id), Some(ActorId(2)));

        let mut close = contact(1, Team::Hunters, 60.0);
        close.invisible = true;
        let contacts = [close, visible];
        let ctx = context(me_monster(3, 1.0, 0.0), &contacts);
        assert_eq!(ctx.nearest(Team::Hunters).map(|(c, _)| c.id), Some(ActorId(1)));
    }

    // ---- Hunter roles ----

    fn gun_kit() -> Vec<AbilityInfo> {
        vec![
            ability(AbilitySlot::Primary, 600.0, AbilityCategory::Projectile),
            ability(AbilitySlot::Secondary, 450.0, AbilityCategory::Area),
        ]
    }

    #[test]
    fn test_role_flee_thresholds() {
        let contacts = [contact(9, Team::Monster, 200.0)];

        let ctx = context(me_hunter(0.28, gun_kit()), &contacts);
        assert_eq!(
            hunter::think(HunterRole::Assault, &ctx, &profile(0.5, 0.5), &mut rng()),
            Decision::flee(ActorId(9))
        );
        assert_eq!(
            hunter::think(HunterRole::Trapper, &ctx, &profile(0.5, 0.5), &mut rng()),
            Decision::attack(ActorId(9))
        );
    }

    #[test]
    fn test_hunter_chases_distant_monster() {
        let contacts = [contact(9, Team::Monster, 900.0)];
        let ctx = context(me_hunter(1.0, gun_kit()), &contacts);
        assert_eq!(
            hunter::think(HunterRole::Assault, &ctx, &profile(0.5, 0.5), &mut rng()),
            Decision::chase(ActorId(9))
        );
    }

    #[test]
    fn test_hunter_engages_within_margin_of_optimal_range() {
        let edge = 150.0 + HUNTER_ENGAGE_MARGIN;
        let near = [contact(9, Team::Monster, edge)];
        let ctx = context(me_hunter(1.0, gun_kit()), &near);
        assert_eq!(
            hunter::think(HunterRole::Assault, &ctx, &profile(0.5, 0.5), &mut rng()),
            Decision::attack(ActorId(9))
        );

        let far = [contact(9, Team::Monster, edge + 1.0)];
        let ctx = context(me_hunter(1.0, gun_kit()), &far);
        assert_eq!(
            hunter::think(HunterRole::Assault, &ctx, &profile(0.5, 0.5), &mut rng()),
            Decision::chase(ActorId(9))
        );
    }

    #[test]
    fn test_medic_heals_most_injured_ally() {
        let mut scratched = contact(1, Team::Hunters, 50.0);
        scratched.health = 55.0;
        let mut mauled = contact(2, Team::Hunters, -50.0);
        mauled.health = 20.0;
        let contacts = [scratched, mauled, contact(9, Team::Monster, 200.0)];
        let ctx = context(me_hunter(1.0, gun_kit()), &contacts);
        assert_eq!(
            hunter::think(HunterRole::Medic, &ctx, &profile(0.5, 0.5), &mut rng()),
            Decision::heal(ActorId(2))
        );
    }

    #[test]
    fn test_medic_revives_downed_ally_first() {
        let mut fallen = contact(1, Team::Hunters, 50.0);
        fallen.alive = false;
        fallen.downed = true;
        fallen.health = 0.0;
        let mut hurt = contact(2, Team::Hunters, 60.0);
        hurt.health = 10.0;
        let contacts = [hurt, fallen];

        let mut kit = gun_kit();
        kit.push(AbilityInfo {
            revives: true,
            ..ability(AbilitySlot::Ability2, 150.0, AbilityCategory::Heal)
        });
        let ctx = context(me_hunter(1.0, kit), &contacts);
        assert_eq!(
            hunter::think(HunterRole::Medic, &ctx, &profile(0.5, 0.5), &mut rng()),
            Decision::heal(ActorId(1))
        );
    }

    #[test]
    fn test_support_shield_depends_on_teamwork() {
        let mut hurt = contact(1, Team::Hunters, 50.0);
        hurt.health = 30.0;
        let contacts = [hurt, contact(9, Team::Monster, 250.0)];
        let ctx = context(me_hunter(1.0, gun_kit()), &contacts);
        assert_eq!(
            hunter::think(HunterRole::Support, &ctx, &profile(0.5, 1.0), &mut rng()),
            Decision::support(ActorId(1))
        );
        assert_eq!(
            hunter::think(HunterRole::Support, &ctx, &profile(0.5, 0.0), &mut rng()),
            Decision::attack(ActorId(9))
        );
    }

    // ---- Controller ----

    fn stage3_controller() -> AiController {
        AiController::with_profile(Brain::Monster(MonsterType::Behemoth), profile(1.0, 0.0))
    }

    #[test]
    fn test_transitions_wait_for_think_tick() {
        let mut ai = stage3_controller();
        let mut rng = rng();

        let close = [contact(1, Team::Hunters, 60.0)];
        ai.update(&context(me_monster(3, 1.0, 0.0), &close), &mut rng);
        assert_eq!(ai.state(), AiState::Attack);

        let far = [contact(1, Team::Hunters, 400.0)];
        ai.update(&context(me_monster(3, 1.0, 0.0), &far), &mut rng);
        assert_eq!(ai.state(), AiState::Attack, "no think before the interval elapses");

        ai.update(&context(me_monster(3, 1.0, 0.0), &far), &mut rng);
        assert_eq!(ai.state(), AiState::Chase);
        assert_eq!(ai.target(), Some(ActorId(1)));
    }

    #[test]
    fn test_dead_target_falls_back_to_patrol() {
        let mut ai = stage3_controller();
        let mut rng = rng();

        let alive = [contact(1, Team::Hunters, 60.0)];
        ai.update(&context(me_monster(3, 1.0, 0.0), &alive), &mut rng);
        assert_eq!(ai.state(), AiState::Attack);

        let mut dead = contact(1, Team::Hunters, 60.0);
        dead.alive = false;
        let intent = ai.update(&context(me_monster(3, 1.0, 0.0), &[dead]), &mut rng);
        assert_eq!(ai.state(), AiState::Patrol);
        assert_eq!(ai.target(), None);
        assert!(intent.casts.is_empty());
    }

    #[test]
    fn test_attack_casts_primary_with_reaction_gap() {
        let mut ai = stage3_controller();
        let mut rng = rng();
        let contacts = [contact(1, Team::Hunters, 60.0)];

        let intent = ai.update(&context(me_monster(3, 1.0, 0.0), &contacts), &mut rng);
        assert_eq!(intent.casts.len(), 1);
        assert_eq!(intent.casts[0].slot, AbilitySlot::Primary);
        assert_eq!(intent.casts[0].target, Some(ActorId(1)));
        assert_eq!(intent.casts[0].aim, Vec2::new(1060.0, 1000.0));
        assert_eq!(intent.facing, Some(0.0));

        let intent = ai.update(&context(me_monster(3, 1.0, 0.0), &contacts), &mut rng);
        assert!(intent.casts.is_empty(), "second cast inside the reaction gap");
    }

    #[test]
    fn test_attack_uses_secondary_at_medium_range() {
        let mut ai = AiController::with_profile(Brain::Monster(MonsterType::Behemoth), profile(1.0, 0.0));
        let mut rng = rng();
        // Stage 2 with a guaranteed aggressiveness roll attacks inside 250.
        let contacts = [contact(1, Team::Hunters, 240.0)];
        let intent = ai.update(&context(me_monster(2, 1.0, 0.9), &contacts), &mut rng);
        assert_eq!(ai.state(), AiState::Attack);
        assert_eq!(intent.casts.first().map(|c| c.slot), Some(AbilitySlot::Secondary));
        // Far outside the band: close the distance.
        assert!(intent.move_dir.x > 0.99);
    }

    #[test]
    fn test_attack_backs_off_when_too_close() {
        let mut ai = AiController::with_profile(Brain::Hunter(HunterRole::Medic), profile(0.5, 0.0));
        let mut rng = rng();
        let contacts = [contact(9, Team::Monster, 100.0)];
        let intent = ai.update(&context(me_hunter(1.0, gun_kit()), &contacts), &mut rng);
        assert_eq!(ai.state(), AiState::Attack);
        assert!(intent.move_dir.x < -0.99);
    }

    #[test]
    fn test_fleeing_hunter_boosts_away() {
        let mut ai = AiController::with_profile(Brain::Hunter(HunterRole::Assault), profile(0.5, 0.5));
        let mut rng = rng();
        let contacts = [contact(9, Team::Monster, 100.0)];
        let intent = ai.update(&context(me_hunter(0.1, gun_kit()), &contacts), &mut rng);
        assert_eq!(ai.state(), AiState::Flee);
        assert!(intent.boost);
        assert!(intent.move_dir.x < -0.99);
    }

    #[test]
    fn test_medic_casts_heal_on_ally_in_reach() {
        let mut ai = AiController::with_profile(Brain::Hunter(HunterRole::Medic), profile(0.5, 0.5));
        let mut rng = rng();
        let mut hurt = contact(1, Team::Hunters, 100.0);
        hurt.health = 30.0;
        let mut kit = gun_kit();
        kit.push(ability(AbilitySlot::Ability1, 200.0, AbilityCategory::Heal));

        let intent = ai.update(&context(me_hunter(1.0, kit), &[hurt]), &mut rng);
        assert_eq!(ai.state(), AiState::Heal);
        assert_eq!(intent.casts.first().map(|c| c.slot), Some(AbilitySlot::Ability1));
        assert_eq!(intent.move_dir, Vec2::ZERO);
    }

    #[test]
    fn test_patrol_moves_toward_point_inside_map() {
        let mut ai = AiController::new(Brain::Monster(MonsterType::Leviathan), Difficulty::Normal);
        let mut rng = rng();
        let none: [Contact; 0] = [];
        let intent = ai.update(&context(me_monster(1, 1.0, 0.0), &none), &mut rng);
        assert_eq!(ai.state(), AiState::Patrol);
        assert!((intent.move_dir.length() - 1.0).abs() < 1e-9);
        assert!(intent.casts.is_empty());
    }

    #[test]
    fn test_same_seed_same_decisions() {
        let contacts = [contact(1, Team::Hunters, 120.0), contact(2, Team::Wildlife, 200.0)];
        let run = || {
            let mut ai = AiController::new(Brain::Monster(MonsterType::Phantom), Difficulty::Normal);
            let mut rng = rng();
            (0..50)
                .map(|_| {
                    let intent = ai.update(&context(me_monster(1, 1.0, 0.0), &contacts), &mut rng);
                    (ai.state(), intent.casts.len())
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_difficulty_presets_are_ordered() {
        let easy = get_difficulty(Difficulty::Easy);
        let normal = get_difficulty(Difficulty::Normal);
        let hard = get_difficulty(Difficulty::Hard);
        assert!(easy.aggressiveness < normal.aggressiveness && normal.aggressiveness < hard.aggressiveness);
        assert!(easy.accuracy < hard.accuracy);
        assert!(easy.reaction_time > normal.reaction_time && normal.reaction_time > hard.reaction_time);
        assert!(easy.teamwork < hard.teamwork);
    }
}
