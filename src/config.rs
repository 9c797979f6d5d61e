//! Settings snapshot handed over by the host on every roll.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_TARGET: &str = ">=10";

/// Who asked for the roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Gm,
    Player,
}

/// Module settings as the host stores them.
///
/// Missing keys fall back to the defaults: disabled, players untouched, `>=10`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FakeDiceConfig {
    pub enabled: bool,
    pub player_enabled: bool,
    pub target: String,
}

impl Default for FakeDiceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            player_enabled: false,
            target: DEFAULT_TARGET.to_string(),
        }
    }
}

impl FakeDiceConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// GMs get their rolls changed whenever the module is on,
    /// players only if player modification is on as well.
    pub fn should_modify(&self, role: UserRole) -> bool {
        if !self.enabled {
            return false;
        }
        match role {
            UserRole::Gm => true,
            UserRole::Player => self.player_enabled,
        }
    }
}
