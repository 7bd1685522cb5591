//! Read-only views handed to collaborators: the per-tick frame snapshot
//! (HUD, minimap, renderer) and the end-of-match summary.

use serde::Serialize;

use crate::enums::{AbilitySlot, AiState, MatchOutcome, MatchPhase, StatusId, Team};
use crate::events::GameEvent;
use crate::hazards::Dome;
use crate::types::{ActorId, SimTime, Vec2};

/// Complete visible state after a tick.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: MatchPhase,
    /// Seconds left on the match clock.
    pub time_remaining: f64,
    pub actors: Vec<ActorView>,
    pub projectiles: Vec<ProjectileView>,
    pub traps: Vec<TrapView>,
    pub dome: Option<Dome>,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActorView {
    pub id: ActorId,
    pub name: String,
    pub team: Team,
    pub position: Vec2,
    pub facing: f64,
    pub radius: f64,
    pub health: f64,
    pub max_health: f64,
    pub energy: f64,
    pub max_energy: f64,
    pub alive: bool,
    pub downed: bool,
    pub evolution_stage: Option<u8>,
    /// Evolution progress in [0, 1] for monsters.
    pub evolution_fraction: Option<f64>,
    pub jetpack_fuel: Option<f64>,
    pub ai_state: Option<AiState>,
    pub player_controlled: bool,
    pub buffs: Vec<StatusView>,
    pub debuffs: Vec<StatusView>,
    pub abilities: Vec<AbilityView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusView {
    pub id: StatusId,
    pub remaining: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbilityView {
    pub slot: AbilitySlot,
    pub id: &'static str,
    pub level: u32,
    pub cooldown_remaining: f64,
    pub ready: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectileView {
    pub position: Vec2,
    pub size: f64,
    pub color: &'static str,
    pub owner_team: Team,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrapView {
    pub position: Vec2,
    pub radius: f64,
    pub lifespan: f64,
}

/// End-of-match numbers for one actor (the local player, or the monster in
/// headless matches).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchSummary {
    pub outcome: Option<MatchOutcome>,
    pub damage_dealt: f64,
    pub damage_taken: f64,
    pub abilities_used: u32,
    pub hunters_killed: u32,
    pub evolution_stage: u8,
    /// Match time elapsed (seconds).
    pub time: f64,
}
