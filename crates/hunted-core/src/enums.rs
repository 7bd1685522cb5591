//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Side an actor fights for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Hunters,
    Monster,
    Wildlife,
}

/// Hunter role. Drives both the ability loadout and the AI brain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HunterRole {
    Assault,
    Trapper,
    Medic,
    Support,
}

impl HunterRole {
    pub const ALL: [HunterRole; 4] = [
        HunterRole::Assault,
        HunterRole::Trapper,
        HunterRole::Medic,
        HunterRole::Support,
    ];

    /// Class id of the stock character for this role.
    pub fn class_id(self) -> &'static str {
        match self {
            HunterRole::Assault => "vanguard",
            HunterRole::Trapper => "warden",
            HunterRole::Medic => "lifeline",
            HunterRole::Support => "bastion",
        }
    }
}

/// Monster archetype.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonsterType {
    /// Armored melee bruiser.
    #[default]
    Behemoth,
    /// Fragile ranged caster.
    Leviathan,
    /// Stealth assassin.
    Phantom,
}

/// Wildlife species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    /// Small and fast, little food.
    Crawler,
    /// Common herd animal.
    Grazer,
    /// Large and slow, lots of food.
    Tusker,
}

/// Named ability slot on an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AbilitySlot {
    Primary,
    Secondary,
    Ability1,
    Ability2,
    Ability3,
    Ability4,
}

impl AbilitySlot {
    pub const SPECIALS: [AbilitySlot; 4] = [
        AbilitySlot::Ability1,
        AbilitySlot::Ability2,
        AbilitySlot::Ability3,
        AbilitySlot::Ability4,
    ];

    pub fn is_special(self) -> bool {
        !matches!(self, AbilitySlot::Primary | AbilitySlot::Secondary)
    }
}

/// Broad ability category, used by AI to pick casts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityCategory {
    Damage,
    Heal,
    Buff,
    Debuff,
    Utility,
    Trap,
    Area,
    Projectile,
}

/// Whether a magnitude hurts or mends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    #[default]
    Damage,
    Heal,
}

/// Identity of a status effect. At most one buff and one debuff per id
/// live on an actor at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusId {
    Shield,
    Haste,
    Fortify,
    Rage,
    Cloak,
    Slow,
    Immobilize,
}

/// What a trap does when sprung.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrapKind {
    /// Damage plus a speed-zero debuff for the trap duration.
    #[default]
    Immobilize,
    /// Damage only.
    Damage,
}

/// AI controller state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiState {
    #[default]
    Idle,
    Patrol,
    Chase,
    Attack,
    Flee,
    Feed,
    Support,
    Heal,
}

/// AI difficulty preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

/// Why a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// The monster died.
    HuntersWin,
    /// No hunter left standing.
    MonsterWinsByElimination,
    /// Match timer ran out with the monster alive.
    MonsterWinsByTimeout,
}

impl MatchOutcome {
    pub fn winner(self) -> Team {
        match self {
            MatchOutcome::HuntersWin => Team::Hunters,
            MatchOutcome::MonsterWinsByElimination | MatchOutcome::MonsterWinsByTimeout => {
                Team::Monster
            }
        }
    }
}

/// Top-level match lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    #[default]
    Setup,
    Running,
    Paused,
    Ended(MatchOutcome),
    Cancelled,
}
