//! Listing limits and write-lock timing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_limit() -> u32 {
    20
}

const fn default_history_limit() -> u32 {
    50
}

const fn default_registry_limit() -> u32 {
    100
}

const fn default_max_limit() -> u32 {
    1000
}

const fn default_lock_timeout_secs() -> u64 {
    300
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Observation rows shown by `data list` and `data filter`.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Saved predictions shown by `prediction list`, newest first.
    #[serde(default = "default_history_limit")]
    pub history_limit: u32,

    /// Students, courses and enrollments shown by registry listings.
    #[serde(default = "default_registry_limit")]
    pub registry_limit: u32,

    /// Ceiling for any limit, including one passed with `--limit`.
    #[serde(default = "default_max_limit")]
    pub max_limit: u32,

    /// How long a write waits for a store another process has locked.
    #[serde(default = "default_lock_timeout_secs")]
    pub lock_timeout_secs: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            history_limit: default_history_limit(),
            registry_limit: default_registry_limit(),
            max_limit: default_max_limit(),
            lock_timeout_secs: default_lock_timeout_secs(),
        }
    }
}

impl GeneralConfig {
    #[must_use]
    pub const fn lock_timeout(&self) -> Duration {
        Duration::from_secs(self.lock_timeout_secs)
    }

    /// Every listing default must be positive and within `max_limit`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a zero limit and
    /// `ConfigError::LimitAboveMax` for a default above the ceiling.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.max_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        for (field, value) in [
            ("general.default_limit", self.default_limit),
            ("general.history_limit", self.history_limit),
            ("general.registry_limit", self.registry_limit),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.into(),
                    reason: "must be at least 1".into(),
                });
            }
            if value > self.max_limit {
                return Err(ConfigError::LimitAboveMax {
                    field,
                    value,
                    max: self.max_limit,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_limit, 20);
        assert_eq!(config.history_limit, 50);
        assert_eq!(config.registry_limit, 100);
        assert_eq!(config.lock_timeout(), Duration::from_secs(300));
        config.validate().unwrap();
    }

    #[test]
    fn listing_default_above_ceiling_is_rejected() {
        let config = GeneralConfig {
            history_limit: 5000,
            ..GeneralConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::LimitAboveMax {
                field: "general.history_limit",
                value: 5000,
                max: 1000
            })
        ));
    }

    #[test]
    fn zero_registry_limit_is_rejected() {
        let config = GeneralConfig {
            registry_limit: 0,
            ..GeneralConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "general.registry_limit"
        ));
    }
}
