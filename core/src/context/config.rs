//! Application configuration
//!
//! Snooze policy and tick cadence, persisted via confy. Alarms themselves
//! are in-memory only and never persisted.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Maximum times a single alarm may be snoozed
    #[serde(default = "default_max_snoozes")]
    pub max_snoozes: u8,

    /// Minutes added to the current time when snoozing
    #[serde(default = "default_snooze_interval")]
    pub snooze_interval_minutes: u32,

    /// Seconds between alarm checks
    #[serde(default = "default_tick_interval")]
    pub tick_interval_secs: u64,
}

fn default_max_snoozes() -> u8 {
    3
}

fn default_snooze_interval() -> u32 {
    5
}

fn default_tick_interval() -> u64 {
    1
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_snoozes: default_max_snoozes(),
            snooze_interval_minutes: default_snooze_interval(),
            tick_interval_secs: default_tick_interval(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        confy::load("chime", "config").unwrap_or_default()
    }

    pub fn save(self) -> Result<(), ConfigError> {
        confy::store("chime", "config", self).map_err(ConfigError::Save)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_snooze_policy() {
        let config = AppConfig::default();
        assert_eq!(config.max_snoozes, 3);
        assert_eq!(config.snooze_interval_minutes, 5);
        assert_eq!(config.tick_interval_secs, 1);
    }
}
