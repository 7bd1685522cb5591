//! Match configuration, loaded from JSON by headless runners.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use hunted_core::constants::*;
use hunted_core::enums::{Difficulty, HunterRole, MonsterType};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read match config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse match config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Which actor, if any, the host drives through `PlayerInput`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerSlot {
    /// Every actor is AI-controlled.
    #[default]
    None,
    Monster,
    Hunter(HunterRole),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// RNG seed. Same seed and inputs give the same match.
    pub seed: u64,
    pub difficulty: Difficulty,
    pub monster: MonsterType,
    /// Hunter roles, in spawn order.
    pub hunters: Vec<HunterRole>,
    pub player: PlayerSlot,
    pub match_duration_secs: f64,
    pub think_interval_secs: f64,
    /// Initial (and maximum) wildlife population.
    pub wildlife_count: usize,
    pub wildlife_respawn_secs: f64,
    pub map_width: f64,
    pub map_height: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            difficulty: Difficulty::Normal,
            monster: MonsterType::Behemoth,
            hunters: HunterRole::ALL.to_vec(),
            player: PlayerSlot::None,
            match_duration_secs: MATCH_DURATION_SECS,
            think_interval_secs: AI_THINK_INTERVAL_SECS,
            wildlife_count: 12,
            wildlife_respawn_secs: WILDLIFE_RESPAWN_INTERVAL_SECS,
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
        }
    }
}

impl MatchConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hunters.is_empty() || self.hunters.len() > HUNTER_COUNT {
            return Err(invalid(
                "hunters",
                format!("expected 1 to {HUNTER_COUNT} roles, got {}", self.hunters.len()),
            ));
        }
        if let PlayerSlot::Hunter(role) = self.player {
            if !self.hunters.contains(&role) {
                return Err(invalid("player", format!("{role:?} is not in the hunter roster")));
            }
        }
        positive("match_duration_secs", self.match_duration_secs)?;
        positive("think_interval_secs", self.think_interval_secs)?;
        positive("wildlife_respawn_secs", self.wildlife_respawn_secs)?;
        positive("map_width", self.map_width)?;
        positive("map_height", self.map_height)?;
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be a positive number, got {value}")))
    }
}
