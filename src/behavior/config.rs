//! Per-type gate configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_OPEN_SOUND: &str = "minecraft:block.fence_gate.open";
pub const DEFAULT_CLOSE_SOUND: &str = "minecraft:block.fence_gate.close";

/// Errors loading configuration documents.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable configuration shared by every gate of one type.
///
/// Missing keys fall back to the vanilla fence gate values.
///
/// ```rust
/// use hinge::behavior::GateConfig;
///
/// let config = GateConfig::from_json(r#"{ "can_open_by_wind_charge": false }"#).unwrap();
/// assert!(!config.can_open_by_wind_charge);
/// assert_eq!(config.open_sound, "minecraft:block.fence_gate.open");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Whether explosions that can trigger blocks flip the gate.
    pub can_open_by_wind_charge: bool,
    pub open_sound: String,
    pub close_sound: String,
}

impl GateConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn sound_for(&self, open: bool) -> &str {
        if open {
            &self.open_sound
        } else {
            &self.close_sound
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            can_open_by_wind_charge: true,
            open_sound: DEFAULT_OPEN_SOUND.to_string(),
            close_sound: DEFAULT_CLOSE_SOUND.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        assert_eq!(GateConfig::from_json("{}").unwrap(), GateConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = GateConfig::from_json(
            r#"{ "open_sound": "custom:creak", "close_sound": "custom:thud" }"#,
        )
        .unwrap();
        assert_eq!(config.sound_for(true), "custom:creak");
        assert_eq!(config.sound_for(false), "custom:thud");
        assert!(config.can_open_by_wind_charge);
    }

    #[test]
    fn malformed_document_is_rejected() {
        let err = GateConfig::from_json(r#"{ "can_open_by_wind_charge": "sometimes" }"#);
        assert!(matches!(err, Err(ConfigError::Parse(_))));
    }
}
