//! Game configuration.

use crate::error::ConfigError;
use crate::party::MAX_PARTY_SIZE;
use serde::{Deserialize, Serialize};

/// Floors given to a dungeon started from the catalog.
pub const DEFAULT_TOTAL_FLOORS: u32 = 30;

/// Action cards offered on each floor.
pub const DEFAULT_ACTION_CARDS_PER_FLOOR: usize = 3;

/// Settings for a game store and the flows built on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Party size limit, at most [`MAX_PARTY_SIZE`].
    pub party_capacity: usize,

    /// Floors used when entering a dungeon through exploration.
    pub default_total_floors: u32,

    /// How many action cards each floor offers.
    pub action_cards_per_floor: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            party_capacity: MAX_PARTY_SIZE,
            default_total_floors: DEFAULT_TOTAL_FLOORS,
            action_cards_per_floor: DEFAULT_ACTION_CARDS_PER_FLOOR,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the party size limit, clamped to `1..=MAX_PARTY_SIZE`.
    pub fn with_party_capacity(mut self, capacity: usize) -> Self {
        self.party_capacity = capacity.clamp(1, MAX_PARTY_SIZE);
        self
    }

    pub fn with_default_total_floors(mut self, floors: u32) -> Self {
        self.default_total_floors = floors;
        self
    }

    pub fn with_action_cards_per_floor(mut self, count: usize) -> Self {
        self.action_cards_per_floor = count;
        self
    }

    /// Parse and validate a JSON configuration. Missing fields take their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.party_capacity == 0 || self.party_capacity > MAX_PARTY_SIZE {
            return Err(ConfigError::Invalid(format!(
                "party_capacity must be between 1 and {MAX_PARTY_SIZE}, got {}",
                self.party_capacity
            )));
        }
        if self.action_cards_per_floor == 0 {
            return Err(ConfigError::Invalid(
                "action_cards_per_floor must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
