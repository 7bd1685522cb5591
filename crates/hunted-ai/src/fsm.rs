//! Per-actor controller state machine.
//!
//! Transitions are decided only on think ticks (see [`crate::monster`] and
//! [`crate::hunter`]); every tick the current state is executed into an
//! [`AiIntent`]. No world access: the caller builds an [`AiContext`] and
//! applies the returned intent.

use rand::Rng;

use hunted_core::constants::*;
use hunted_core::enums::{AbilityCategory, AbilitySlot, AiState, Difficulty};
use hunted_core::types::{direction, from_heading, heading, ActorId, Vec2};

use crate::context::{AbilityInfo, AiContext, Contact};
use crate::profiles::{get_difficulty, get_profile, Brain, DifficultyProfile};
use crate::{hunter, monster};

/// Outcome of a think tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub state: AiState,
    pub target: Option<ActorId>,
}

impl Decision {
    pub fn patrol() -> Self {
        Self {
            state: AiState::Patrol,
            target: None,
        }
    }

    pub fn chase(target: ActorId) -> Self {
        Self::with(AiState::Chase, target)
    }

    pub fn attack(target: ActorId) -> Self {
        Self::with(AiState::Attack, target)
    }

    pub fn flee(target: ActorId) -> Self {
        Self::with(AiState::Flee, target)
    }

    pub fn feed(target: ActorId) -> Self {
        Self::with(AiState::Feed, target)
    }

    pub fn heal(target: ActorId) -> Self {
        Self::with(AiState::Heal, target)
    }

    pub fn support(target: ActorId) -> Self {
        Self::with(AiState::Support, target)
    }

    fn with(state: AiState, target: ActorId) -> Self {
        Self {
            state,
            target: Some(target),
        }
    }
}

/// Request to cast one ability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CastOrder {
    pub slot: AbilitySlot,
    pub target: Option<ActorId>,
    pub aim: Vec2,
}

/// What the controller wants its actor to do this tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AiIntent {
    /// Unit movement direction, or zero to stand still.
    pub move_dir: Vec2,
    /// Facing to adopt, when the state cares about it.
    pub facing: Option<f64>,
    /// Jetpack boost (hunters only).
    pub boost: bool,
    /// Casts in the order they should be attempted.
    pub casts: Vec<CastOrder>,
}

#[derive(Debug, Clone)]
pub struct AiController {
    brain: Brain,
    difficulty: DifficultyProfile,
    state: AiState,
    target: Option<ActorId>,
    state_timer: f64,
    think_timer: f64,
    think_interval: f64,
    clock: f64,
    last_cast_at: Option<f64>,
    patrol_point: Option<Vec2>,
    strafe_sign: f64,
    strafe_timer: f64,
}

impl AiController {
    pub fn new(brain: Brain, difficulty: Difficulty) -> Self {
        Self::with_profile(brain, get_difficulty(difficulty))
    }

    pub fn with_profile(brain: Brain, difficulty: DifficultyProfile) -> Self {
        Self {
            brain,
            difficulty,
            state: AiState::Idle,
            target: None,
            state_timer: 0.0,
            think_timer: 0.0,
            think_interval: AI_THINK_INTERVAL_SECS,
            clock: 0.0,
            last_cast_at: None,
            patrol_point: None,
            strafe_sign: 1.0,
            strafe_timer: 0.0,
        }
    }

    pub fn with_think_interval(mut self, seconds: f64) -> Self {
        self.think_interval = seconds.max(0.0);
        self
    }

    pub fn brain(&self) -> Brain {
        self.brain
    }

    pub fn state(&self) -> AiState {
        self.state
    }

    pub fn target(&self) -> Option<ActorId> {
        self.target
    }

    /// Advance timers, think if due, and execute the current state.
    pub fn update<R: Rng + ?Sized>(&mut self, ctx: &AiContext, rng: &mut R) -> AiIntent {
        let dt = ctx.dt.max(0.0);
        self.clock += dt;
        self.state_timer += dt;
        self.think_timer -= dt;

        if self.think_timer <= 0.0 {
            self.think_timer = self.think_interval;
            let decision = match self.brain {
                Brain::Monster(_) => monster::think(ctx, &self.difficulty, rng),
                Brain::Hunter(role) => hunter::think(role, ctx, &self.difficulty, rng),
            };
            self.transition(decision);
        }

        self.revalidate(ctx);
        self.execute(ctx, rng)
    }

    fn transition(&mut self, decision: Decision) {
        if decision.state != self.state {
            self.state_timer = 0.0;
        }
        self.state = decision.state;
        self.target = decision.target;
    }

    /// Drop a target that died, despawned or slipped out of perception.
    fn revalidate(&mut self, ctx: &AiContext) {
        if matches!(self.state, AiState::Idle | AiState::Patrol) {
            return;
        }
        let valid = self
            .target
            .and_then(|id| ctx.contact(id))
            .is_some_and(|c| {
                let usable = c.alive || (self.state == AiState::Heal && c.downed);
                usable && ctx.perceives(c)
            });
        if !valid {
            self.transition(Decision::patrol());
        }
    }

    fn execute<R: Rng + ?Sized>(&mut self, ctx: &AiContext, rng: &mut R) -> AiIntent {
        let target = self.target.and_then(|id| ctx.contact(id)).copied();
        match (self.state, target) {
            (AiState::Patrol, _) => self.patrol(ctx, rng),
            (AiState::Chase, Some(t)) => {
                let dir = direction(ctx.me.position, t.position);
                AiIntent {
                    move_dir: dir,
                    facing: Some(heading(dir)),
                    ..AiIntent::default()
                }
            }
            (AiState::Attack, Some(t)) => self.attack(ctx, &t, rng),
            (AiState::Flee, Some(t)) => {
                let dir = direction(t.position, ctx.me.position);
                AiIntent {
                    move_dir: dir,
                    facing: Some(heading(dir)),
                    boost: matches!(self.brain, Brain::Hunter(_)),
                    casts: Vec::new(),
                }
            }
            (AiState::Feed, Some(t)) => self.feed(ctx, &t, rng),
            (AiState::Heal | AiState::Support, Some(t)) => self.assist(ctx, &t),
            _ => AiIntent::default(),
        }
    }

    fn patrol<R: Rng + ?Sized>(&mut self, ctx: &AiContext, rng: &mut R) -> AiIntent {
        let me = ctx.me.position;
        let arrived = self
            .patrol_point
            .is_none_or(|p| me.distance(p) < PATROL_ARRIVAL_RADIUS);
        if arrived || self.state_timer > PATROL_RETARGET_SECS {
            self.state_timer = 0.0;
            let margin_x = (ctx.map_size.x * 0.1).min(100.0).max(0.0);
            let margin_y = (ctx.map_size.y * 0.1).min(100.0).max(0.0);
            self.patrol_point = Some(Vec2::new(
                rng.gen_range(margin_x..=(ctx.map_size.x - margin_x).max(margin_x)),
                rng.gen_range(margin_y..=(ctx.map_size.y - margin_y).max(margin_y)),
            ));
        }
        let dir = self
            .patrol_point
            .map_or(Vec2::ZERO, |p| direction(me, p));
        AiIntent {
            move_dir: dir,
            facing: Some(heading(dir)),
            ..AiIntent::default()
        }
    }

    fn attack<R: Rng + ?Sized>(&mut self, ctx: &AiContext, target: &Contact, rng: &mut R) -> AiIntent {
        let me = &ctx.me;
        let d = me.position.distance(target.position);
        let dir = direction(me.position, target.position);
        let band = get_profile(self.brain).optimal_range;

        self.strafe_timer += ctx.dt.max(0.0);
        if self.strafe_timer >= STRAFE_FLIP_SECS {
            self.strafe_timer = 0.0;
            self.strafe_sign = -self.strafe_sign;
        }

        let move_dir = if d > band * 1.2 {
            dir
        } else if d < band * 0.8 {
            -dir
        } else {
            dir.perp() * self.strafe_sign
        };

        let mut intent = AiIntent {
            move_dir,
            facing: Some(heading(dir)),
            ..AiIntent::default()
        };

        if self.cast_ready() {
            if let Some(slot) = pick_weapon(me.ability(AbilitySlot::Primary), me.ability(AbilitySlot::Secondary), d, target.radius, band) {
                intent.casts.push(CastOrder {
                    slot,
                    target: Some(target.id),
                    aim: self.aim_at(target.position, rng),
                });
                self.last_cast_at = Some(self.clock);
            }
        }

        let special_chance = (self.difficulty.special_rate * ctx.dt.max(0.0)).min(1.0);
        if rng.gen::<f64>() < special_chance {
            let candidates: Vec<&AbilityInfo> = me
                .abilities
                .iter()
                .filter(|a| {
                    a.slot.is_special()
                        && a.ready
                        && !a.supportive
                        && (a.range <= 0.0 || d <= a.range + target.radius)
                })
                .collect();
            if !candidates.is_empty() {
                let pick = candidates[rng.gen_range(0..candidates.len())];
                intent.casts.push(CastOrder {
                    slot: pick.slot,
                    target: Some(target.id),
                    aim: self.aim_at(target.position, rng),
                });
            }
        }

        intent
    }

    fn feed<R: Rng + ?Sized>(&mut self, ctx: &AiContext, prey: &Contact, rng: &mut R) -> AiIntent {
        let me = &ctx.me;
        let dir = direction(me.position, prey.position);
        let d = me.position.distance(prey.position);
        let mut intent = AiIntent {
            move_dir: dir,
            facing: Some(heading(dir)),
            ..AiIntent::default()
        };
        if let Some(primary) = me.ability(AbilitySlot::Primary) {
            let in_reach = d <= primary.range + prey.radius;
            if in_reach {
                intent.move_dir = Vec2::ZERO;
            }
            if in_reach && primary.ready && self.cast_ready() {
                intent.casts.push(CastOrder {
                    slot: AbilitySlot::Primary,
                    target: Some(prey.id),
                    aim: self.aim_at(prey.position, rng),
                });
                self.last_cast_at = Some(self.clock);
            }
        }
        intent
    }

    /// Heal or Support: close in on the ally and cast a fitting ability.
    fn assist(&mut self, ctx: &AiContext, ally: &Contact) -> AiIntent {
        let me = &ctx.me;
        let d = me.position.distance(ally.position);
        let dir = direction(me.position, ally.position);
        let wanted = |a: &&AbilityInfo| {
            a.supportive
                && if ally.downed {
                    a.revives
                } else if self.state == AiState::Heal {
                    a.category == AbilityCategory::Heal && !a.revives
                } else {
                    a.category == AbilityCategory::Buff
                }
        };

        let kit: Vec<&AbilityInfo> = me.abilities.iter().filter(wanted).collect();
        let reach = kit
            .iter()
            .map(|a| a.range)
            .fold(f64::INFINITY, f64::min);
        let reach = if reach.is_finite() { reach } else { 100.0 };

        let mut intent = AiIntent {
            move_dir: if d > reach * 0.8 { dir } else { Vec2::ZERO },
            facing: Some(heading(dir)),
            ..AiIntent::default()
        };

        if self.cast_ready() {
            if let Some(ability) = kit.iter().find(|a| a.ready && d <= a.range + ally.radius) {
                intent.casts.push(CastOrder {
                    slot: ability.slot,
                    target: Some(ally.id),
                    aim: ally.position,
                });
                self.last_cast_at = Some(self.clock);
            }
        }
        intent
    }

    /// Minimum gap between weapon casts, scaled by reaction time.
    fn cast_ready(&self) -> bool {
        let gap = AI_BASE_CAST_INTERVAL_SECS * self.difficulty.reaction_time;
        self.last_cast_at.is_none_or(|t| self.clock - t >= gap)
    }

    /// Target point scattered by inaccuracy.
    fn aim_at<R: Rng + ?Sized>(&self, point: Vec2, rng: &mut R) -> Vec2 {
        let spread = (1.0 - self.difficulty.accuracy).clamp(0.0, 1.0) * AIM_JITTER_RADIUS;
        if spread <= 0.0 {
            return point;
        }
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        point + from_heading(angle) * rng.gen_range(0.0..=spread)
    }
}

/// Primary at close range, secondary at medium range.
fn pick_weapon(
    primary: Option<&AbilityInfo>,
    secondary: Option<&AbilityInfo>,
    distance: f64,
    target_radius: f64,
    band: f64,
) -> Option<AbilitySlot> {
    let usable = |a: Option<&AbilityInfo>| {
        a.filter(|a| a.ready && !a.supportive && distance <= a.range + target_radius)
            .map(|a| a.slot)
    };
    let primary = usable(primary);
    let secondary = usable(secondary);
    match (primary, secondary) {
        (Some(p), Some(_)) if distance <= band * 1.25 => Some(p),
        (_, Some(s)) => Some(s),
        (p, None) => p,
    }
}
