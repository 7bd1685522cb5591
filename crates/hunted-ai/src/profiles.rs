//! Difficulty presets and per-brain behavioral profiles.

use hunted_core::constants::*;
use hunted_core::enums::{Difficulty, HunterRole, MonsterType};

/// Which decision ladder a controller runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brain {
    Monster(MonsterType),
    Hunter(HunterRole),
}

/// Difficulty-scaled knobs shared by every brain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Probability of choosing to fight when a fight/flee roll comes up.
    pub aggressiveness: f64,
    /// 1.0 aims dead on the target; lower values scatter the aim point.
    pub accuracy: f64,
    /// Multiplier on the minimum interval between casts.
    pub reaction_time: f64,
    /// Expected special-ability attempts per second while attacking.
    pub special_rate: f64,
    /// Probability a hunter stops to help an ally.
    pub teamwork: f64,
}

pub fn get_difficulty(difficulty: Difficulty) -> DifficultyProfile {
    match difficulty {
        Difficulty::Easy => DifficultyProfile {
            aggressiveness: 0.3,
            accuracy: 0.6,
            reaction_time: 1.5,
            special_rate: 0.3,
            teamwork: 0.5,
        },
        Difficulty::Normal => DifficultyProfile {
            aggressiveness: 0.5,
            accuracy: 0.8,
            reaction_time: 1.0,
            special_rate: 0.6,
            teamwork: 0.75,
        },
        Difficulty::Hard => DifficultyProfile {
            aggressiveness: 0.75,
            accuracy: 0.95,
            reaction_time: 0.6,
            special_rate: 1.0,
            teamwork: 0.95,
        },
    }
}

/// Range-keeping and retreat parameters for one brain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrainProfile {
    /// Center of the distance band held while attacking.
    pub optimal_range: f64,
    /// Health fraction under which the brain retreats, if it ever does on
    /// its own. The monster's retreat is part of its ladder instead.
    pub flee_below: Option<f64>,
}

pub fn get_profile(brain: Brain) -> BrainProfile {
    match brain {
        Brain::Monster(MonsterType::Behemoth) => BrainProfile {
            optimal_range: 50.0,
            flee_below: None,
        },
        Brain::Monster(MonsterType::Leviathan) => BrainProfile {
            optimal_range: 200.0,
            flee_below: None,
        },
        Brain::Monster(MonsterType::Phantom) => BrainProfile {
            optimal_range: 60.0,
            flee_below: None,
        },
        Brain::Hunter(HunterRole::Assault) => BrainProfile {
            optimal_range: 150.0,
            flee_below: Some(ASSAULT_FLEE_HEALTH_FRACTION),
        },
        Brain::Hunter(HunterRole::Trapper) => BrainProfile {
            optimal_range: 220.0,
            flee_below: Some(TRAPPER_FLEE_HEALTH_FRACTION),
        },
        Brain::Hunter(HunterRole::Medic) => BrainProfile {
            optimal_range: 250.0,
            flee_below: None,
        },
        Brain::Hunter(HunterRole::Support) => BrainProfile {
            optimal_range: 200.0,
            flee_below: None,
        },
    }
}
