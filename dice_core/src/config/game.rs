//! Game configuration: dice, weights and roll count

use super::ConfigError;
use crate::die::Die;
use crate::game::Game;
use crate::types::Face;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A game described in TOML
///
/// ```toml
/// num_rolls = 1000
/// seed = 42
///
/// [[dice]]
/// faces = [1, 2, 3, 4, 5, 6]
/// weights = { "6" = 5.0 }
///
/// [[dice]]
/// faces = [1, 2, 3, 4, 5, 6]
/// count = 2
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rolls per play
    #[serde(default = "default_num_rolls")]
    pub num_rolls: usize,
    /// Fixed RNG seed for reproducible plays
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub dice: Vec<DieConfig>,
}

/// One die entry, optionally replicated `count` times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DieConfig {
    pub faces: Vec<Face>,
    /// Face label → weight; unlisted faces keep weight 1.0
    #[serde(default)]
    pub weights: BTreeMap<String, f64>,
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_num_rolls() -> usize {
    1000
}

fn default_count() -> usize {
    1
}

impl GameConfig {
    /// `num_dice` fair dice numbered 1 through `sides`
    pub fn fair(sides: u32, num_dice: usize) -> Self {
        GameConfig {
            num_rolls: default_num_rolls(),
            seed: None,
            dice: vec![DieConfig {
                faces: (1..=i64::from(sides)).map(Face::Int).collect(),
                weights: BTreeMap::new(),
                count: num_dice,
            }],
        }
    }

    /// Check the settings that the dice themselves do not validate
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_rolls == 0 {
            return Err(ConfigError::ValidationError(
                "num_rolls must be at least 1".to_string(),
            ));
        }
        if self.dice.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one [[dice]] entry is required".to_string(),
            ));
        }
        if let Some(idx) = self.dice.iter().position(|d| d.count == 0) {
            return Err(ConfigError::ValidationError(format!(
                "dice entry {} has count 0",
                idx
            )));
        }
        Ok(())
    }

    /// Total number of dice after expanding `count`
    pub fn num_dice(&self) -> usize {
        self.dice.iter().map(|d| d.count).sum()
    }

    /// Build an unplayed game from this configuration
    pub fn build_game(&self) -> Result<Game, ConfigError> {
        self.validate()?;

        let mut dice = Vec::with_capacity(self.num_dice());
        for entry in &self.dice {
            let die = entry.build_die()?;
            dice.extend(std::iter::repeat(die).take(entry.count));
        }

        tracing::debug!(num_dice = dice.len(), "built game from config");
        Ok(Game::new(dice)?)
    }
}

impl DieConfig {
    /// Build one die with the configured weights applied
    pub fn build_die(&self) -> Result<Die, ConfigError> {
        let mut die = Die::new(self.faces.iter())?;
        for (label, weight) in &self.weights {
            let face = self
                .faces
                .iter()
                .find(|f| f.to_string() == *label)
                .ok_or_else(|| {
                    ConfigError::ValidationError(format!(
                        "weight given for unknown face {:?}",
                        label
                    ))
                })?;
            die.set_weight(face, *weight)?;
        }
        Ok(die)
    }
}

/// Load a game configuration from a TOML file
pub fn load_config(path: &Path) -> Result<GameConfig, ConfigError> {
    let config: GameConfig = super::load_toml(path)?;
    config.validate()?;
    Ok(config)
}

/// Load a game configuration from a TOML string
pub fn parse_config(content: &str) -> Result<GameConfig, ConfigError> {
    let config: GameConfig = super::parse_toml(content)?;
    config.validate()?;
    Ok(config)
}
