//! Simulation engine: the core of the match.
//!
//! `Simulation` owns the hecs world, the hazard lists and the match clock,
//! processes lifecycle commands and player input, runs all systems in a
//! fixed order, and produces `FrameSnapshot`s. Completely headless, so a
//! seeded match is reproducible in tests.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use hunted_abilities::catalog::AbilityCatalog;
use hunted_core::actor::Actor;
use hunted_core::commands::{PlayerInput, SimCommand};
use hunted_core::constants::MAX_TICK_DT;
use hunted_core::enums::{MatchOutcome, MatchPhase, Team};
use hunted_core::events::GameEvent;
use hunted_core::state::{FrameSnapshot, MatchSummary};
use hunted_core::types::{ActorId, SimTime, Vec2};
use hunted_terrain::{ArenaMap, Terrain};

use crate::combat::{Combat, Hazards};
use crate::components::{actor_id, entity_of, CombatStats, PlayerControlled};
use crate::config::MatchConfig;
use crate::systems;
use crate::systems::cleanup::RespawnClock;
use crate::world_setup;

pub struct Simulation {
    world: World,
    /// Every live entity in spawn order.
    roster: Vec<Entity>,
    terrain: Box<dyn Terrain>,
    hazards: Hazards,
    time: SimTime,
    time_remaining: f64,
    phase: MatchPhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<SimCommand>,
    input: PlayerInput,
    events: Vec<GameEvent>,
    despawn_buffer: Vec<Entity>,
    respawn: RespawnClock,
}

impl Simulation {
    /// New match on the stock arena sized by the config.
    pub fn new(config: MatchConfig) -> Self {
        let terrain = ArenaMap::standard(config.map_width, config.map_height);
        Self::with_terrain(config, Box::new(terrain))
    }

    /// New match on a caller-supplied map. Actors are spawned immediately;
    /// the clock starts on [`SimCommand::Start`].
    pub fn with_terrain(config: MatchConfig, terrain: Box<dyn Terrain>) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut world = World::new();
        let mut roster = Vec::new();
        let catalog = AbilityCatalog::standard();
        world_setup::populate(
            &mut world,
            &mut roster,
            terrain.as_ref(),
            &catalog,
            &config,
            &mut rng,
        );

        Self {
            world,
            roster,
            terrain,
            hazards: Hazards::default(),
            time: SimTime::default(),
            time_remaining: config.match_duration_secs,
            phase: MatchPhase::Setup,
            rng,
            command_queue: VecDeque::new(),
            input: PlayerInput::default(),
            events: Vec::new(),
            despawn_buffer: Vec::new(),
            respawn: RespawnClock::new(config.wildlife_respawn_secs, config.wildlife_count),
        }
    }

    /// Queue a lifecycle command for the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Replace the player input. A one-shot `cast` is consumed by the next
    /// running tick.
    pub fn set_input(&mut self, input: PlayerInput) {
        self.input = input;
    }

    /// Advance by `dt` seconds and return the resulting snapshot.
    /// `dt` is clamped to `[0, MAX_TICK_DT]`; NaN counts as zero.
    pub fn tick(&mut self, dt: f64) -> FrameSnapshot {
        self.process_commands();

        if self.phase == MatchPhase::Running {
            self.run_systems(clamp_dt(dt));
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.roster,
            &self.hazards,
            self.time,
            self.phase,
            self.time_remaining,
            events,
        )
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == MatchPhase::Running
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        match self.phase {
            MatchPhase::Ended(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn time_remaining(&self) -> f64 {
        self.time_remaining
    }

    pub fn terrain(&self) -> &dyn Terrain {
        self.terrain.as_ref()
    }

    pub fn hazards(&self) -> &Hazards {
        &self.hazards
    }

    /// Ids of every actor in spawn order.
    pub fn actor_ids(&self) -> Vec<ActorId> {
        self.roster.iter().map(|&e| actor_id(e)).collect()
    }

    /// First actor on `team` in spawn order.
    pub fn find(&self, team: Team) -> Option<ActorId> {
        self.roster
            .iter()
            .find(|&&e| self.world.get::<&Actor>(e).is_ok_and(|a| a.team() == team))
            .map(|&e| actor_id(e))
    }

    pub fn actor(&self, id: ActorId) -> Option<hecs::Ref<'_, Actor>> {
        self.world.get::<&Actor>(entity_of(id)?).ok()
    }

    pub fn stats(&self, id: ActorId) -> Option<CombatStats> {
        self.world
            .get::<&CombatStats>(entity_of(id)?)
            .ok()
            .map(|s| *s)
    }

    /// End-of-match numbers for the player actor, or for the monster when
    /// nobody is player-controlled.
    pub fn summary(&self) -> MatchSummary {
        let subject = self
            .roster
            .iter()
            .copied()
            .find(|&e| self.world.get::<&PlayerControlled>(e).is_ok())
            .map(actor_id)
            .or_else(|| self.find(Team::Monster));
        let stats = subject.and_then(|id| self.stats(id)).unwrap_or_default();
        let evolution_stage = self
            .find(Team::Monster)
            .and_then(|id| self.actor(id).and_then(|a| a.evolution_stage()))
            .unwrap_or(1);

        MatchSummary {
            outcome: self.outcome(),
            damage_dealt: stats.damage_dealt,
            damage_taken: stats.damage_taken,
            abilities_used: stats.abilities_used,
            hunters_killed: stats.hunters_killed,
            evolution_stage,
            time: self.time.elapsed_secs,
        }
    }

    /// Direct actor access for test setup.
    #[cfg(test)]
    pub fn actor_mut(&mut self, id: ActorId) -> Option<hecs::RefMut<'_, Actor>> {
        self.world.get::<&mut Actor>(entity_of(id)?).ok()
    }

    #[cfg(test)]
    pub fn hazards_mut(&mut self) -> &mut Hazards {
        &mut self.hazards
    }

    /// Strip every AI controller so tests can stage positions by hand.
    #[cfg(test)]
    pub fn freeze_ai(&mut self) {
        for &entity in &self.roster {
            let _ = self
                .world
                .remove_one::<hunted_ai::fsm::AiController>(entity);
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::Start => {
                if self.phase == MatchPhase::Setup {
                    info!(actors = self.roster.len(), "match started");
                    self.phase = MatchPhase::Running;
                }
            }
            SimCommand::Pause => {
                if self.phase == MatchPhase::Running {
                    info!(elapsed = self.time.elapsed_secs, "match paused");
                    self.phase = MatchPhase::Paused;
                }
            }
            SimCommand::Resume => {
                if self.phase == MatchPhase::Paused {
                    info!(elapsed = self.time.elapsed_secs, "match resumed");
                    self.phase = MatchPhase::Running;
                }
            }
            SimCommand::Cancel => {
                if !matches!(self.phase, MatchPhase::Ended(_) | MatchPhase::Cancelled) {
                    info!(elapsed = self.time.elapsed_secs, "match cancelled");
                    self.phase = MatchPhase::Cancelled;
                }
            }
        }
    }

    fn end(&mut self, outcome: MatchOutcome) {
        info!(
            ?outcome,
            winner = ?outcome.winner(),
            elapsed = self.time.elapsed_secs,
            "match ended"
        );
        self.phase = MatchPhase::Ended(outcome);
        self.events.push(GameEvent::MatchEnded { outcome });
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Match clock
        self.time.advance(dt);
        self.time_remaining -= dt;
        if self.time_remaining <= 0.0 {
            self.time_remaining = 0.0;
            self.end(MatchOutcome::MonsterWinsByTimeout);
            return;
        }

        let map_size = Vec2::new(self.terrain.width(), self.terrain.height());
        {
            let mut combat = Combat {
                world: &mut self.world,
                roster: &self.roster,
                terrain: self.terrain.as_ref(),
                hazards: &mut self.hazards,
                events: &mut self.events,
            };
            // 2. Player input
            systems::input::run(&mut combat, &self.input);
            // 3. AI controllers
            systems::ai::run(&mut combat, &mut self.rng, map_size, dt);
        }
        self.input.cast = None;

        // 4. Actor update
        systems::movement::run(&mut self.world, dt);
        // 5. Map bounds, obstacles, dome
        systems::constraints::run(&mut self.world, self.terrain.as_ref(), self.hazards.dome.as_ref());
        // 6. Wildlife flee scan
        systems::wildlife::run(&mut self.world, &self.roster, &mut self.rng, dt);
        {
            let mut combat = Combat {
                world: &mut self.world,
                roster: &self.roster,
                terrain: self.terrain.as_ref(),
                hazards: &mut self.hazards,
                events: &mut self.events,
            };
            // 7. Projectiles
            systems::projectiles::run(&mut combat, dt);
            // 8. Traps
            systems::traps::run(&mut combat, dt);
        }
        // 9. Dome countdown
        systems::dome::run(&mut self.hazards, &mut self.events, dt);
        // 10. Overlap push-apart
        systems::separation::run(
            &mut self.world,
            &self.roster,
            self.terrain.as_ref(),
            self.hazards.dome.as_ref(),
        );
        // 10b. Revive progress
        systems::revive::run(&mut self.world, &self.roster, &mut self.events, dt);
        // 11. Win conditions
        if let Some(outcome) = systems::win::evaluate(&self.world) {
            self.end(outcome);
            return;
        }
        // 12. Dead wildlife out, fresh wildlife in
        systems::cleanup::run(&mut self.world, &mut self.roster, &mut self.despawn_buffer);
        systems::cleanup::respawn(
            &mut self.world,
            &mut self.roster,
            self.terrain.as_ref(),
            &mut self.rng,
            &mut self.respawn,
            dt,
        );
    }
}

/// Clamp a caller-supplied delta into `[0, MAX_TICK_DT]`. NaN becomes 0.
pub fn clamp_dt(dt: f64) -> f64 {
    if dt.is_nan() {
        0.0
    } else {
        dt.clamp(0.0, MAX_TICK_DT)
    }
}
