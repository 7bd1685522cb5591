//! Simulation constants and tuning parameters.

/// Nominal tick rate used by headless runners (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the nominal rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Largest dt a single tick will integrate (seconds).
/// Larger deltas from paused or backgrounded callers are clamped to this.
pub const MAX_TICK_DT: f64 = 0.1;

// --- Match ---

/// Default match length (seconds).
pub const MATCH_DURATION_SECS: f64 = 600.0;

/// Number of hunters in a standard match.
pub const HUNTER_COUNT: usize = 4;

/// Default arena width (world units).
pub const DEFAULT_MAP_WIDTH: f64 = 2400.0;

/// Default arena height (world units).
pub const DEFAULT_MAP_HEIGHT: f64 = 1800.0;

// --- Combat ---

/// Armor points to damage reduction fraction (armor 20 = 20% reduction).
pub const ARMOR_MITIGATION_PER_POINT: f64 = 0.01;

/// Upper bound of the armor scale.
pub const MAX_ARMOR: f64 = 100.0;

/// Floor for mitigated damage of any hit that gets through shields.
pub const MIN_DAMAGE_PER_HIT: f64 = 1.0;

/// Fraction of max health restored by a revive.
pub const REVIVE_HEALTH_FRACTION: f64 = 0.5;

/// Seconds a living ally must stay close to a downed hunter to revive them.
pub const REVIVE_DURATION_SECS: f64 = 3.0;

/// Reach within which an ally contributes to a revive.
pub const REVIVE_REACH: f64 = 40.0;

/// Invisible actors are still perceived inside this radius.
pub const STEALTH_REVEAL_RADIUS: f64 = 80.0;

// --- Abilities ---

/// Scaled damage gain per ability level above 1.
pub const ABILITY_DAMAGE_PER_LEVEL: f64 = 0.2;

/// Damage multiplier applied on each ability upgrade.
pub const ABILITY_UPGRADE_DAMAGE_FACTOR: f64 = 1.2;

/// Cooldown multiplier applied on each ability upgrade.
pub const ABILITY_UPGRADE_COOLDOWN_FACTOR: f64 = 0.9;

/// Default maximum ability level.
pub const ABILITY_MAX_LEVEL: u32 = 3;

// --- Evolution ---

/// Highest monster evolution stage.
pub const MAX_EVOLUTION_STAGE: u8 = 3;

/// Evolution threshold growth per stage-up.
pub const EVOLUTION_THRESHOLD_GROWTH: f64 = 1.5;

/// Evolution progress needed to reach stage 2.
pub const BASE_EVOLUTION_THRESHOLD: f64 = 200.0;

// --- Hazards ---

/// Fixed lifespan of an untriggered trap (seconds).
pub const TRAP_LIFESPAN_SECS: f64 = 30.0;

/// Wildlife within this distance of a living non-wildlife actor flees it.
pub const WILDLIFE_FLEE_RADIUS: f64 = 150.0;

/// Wildlife wander retarget interval (seconds).
pub const WILDLIFE_WANDER_INTERVAL_SECS: f64 = 3.0;

/// Fraction of full speed used while wandering.
pub const WILDLIFE_WANDER_PACE: f64 = 0.5;

/// Default interval between wildlife respawns (seconds).
pub const WILDLIFE_RESPAWN_INTERVAL_SECS: f64 = 20.0;

// --- Jetpack ---

/// Default jetpack fuel capacity.
pub const JETPACK_MAX_FUEL: f64 = 100.0;

/// Fuel consumed per second of boosting.
pub const JETPACK_DRAIN_PER_SEC: f64 = 40.0;

/// Fuel recovered per second while not boosting.
pub const JETPACK_REGEN_PER_SEC: f64 = 15.0;

/// Speed multiplier while boosting.
pub const JETPACK_SPEED_MULTIPLIER: f64 = 1.8;

// --- AI ---

/// Default AI think interval (seconds).
pub const AI_THINK_INTERVAL_SECS: f64 = 0.2;

/// Minimum seconds between AI ability casts at reaction multiplier 1.0.
pub const AI_BASE_CAST_INTERVAL_SECS: f64 = 0.5;

/// Monster flees below this health fraction (stages 1-2).
pub const MONSTER_FLEE_HEALTH_FRACTION: f64 = 0.3;

/// Hunters inside this range trigger the low-health flee.
pub const MONSTER_FLEE_SCAN_RANGE: f64 = 200.0;

/// Stage 1 engage range.
pub const MONSTER_STAGE1_ENGAGE_RANGE: f64 = 150.0;

/// Stage 1 wildlife search range.
pub const MONSTER_STAGE1_FEED_RANGE: f64 = 300.0;

/// Stage 2 engage range.
pub const MONSTER_STAGE2_ENGAGE_RANGE: f64 = 250.0;

/// Stage 2 keeps feeding below this evolution fraction.
pub const MONSTER_STAGE2_FEED_UNTIL: f64 = 0.8;

/// Stage 3 switches from Chase to Attack inside this range.
pub const MONSTER_STAGE3_ATTACK_RANGE: f64 = 100.0;

/// Assault hunters flee below this health fraction.
pub const ASSAULT_FLEE_HEALTH_FRACTION: f64 = 0.3;

/// Trapper hunters flee below this health fraction.
pub const TRAPPER_FLEE_HEALTH_FRACTION: f64 = 0.25;

/// Medics heal allies below this health fraction.
pub const MEDIC_HEAL_THRESHOLD: f64 = 0.6;

/// Supports shield allies below this health fraction.
pub const SUPPORT_SHIELD_THRESHOLD: f64 = 0.5;

/// Distance at which a patrol waypoint counts as reached.
pub const PATROL_ARRIVAL_RADIUS: f64 = 30.0;

/// Seconds before a patrol waypoint is abandoned.
pub const PATROL_RETARGET_SECS: f64 = 8.0;

/// Seconds between strafe direction flips during Attack.
pub const STRAFE_FLIP_SECS: f64 = 1.5;

/// Hunters switch from Chase to Attack this far beyond their optimal range.
pub const HUNTER_ENGAGE_MARGIN: f64 = 150.0;

/// Radius of aim scatter at zero accuracy (world units).
pub const AIM_JITTER_RADIUS: f64 = 120.0;
