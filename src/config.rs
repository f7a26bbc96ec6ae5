// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Engine configuration loaded from environment variables.

use chrono::{FixedOffset, Offset, Utc};
use std::env;

const DEFAULT_URGENCY_WINDOW_DAYS: i64 = 7;
const DEFAULT_MAX_UPDATE_RETRIES: u32 = 5;

/// Engine configuration, loaded once by the host application.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// UTC offset used to decide which calendar day an entry belongs to
    pub day_offset: FixedOffset,
    /// Goals due within this many days are reported as "{n} days left"
    pub urgency_window_days: i64,
    /// How many times a conflicting progress update is re-applied
    pub max_update_retries: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            day_offset: Utc.fix(),
            urgency_window_days: DEFAULT_URGENCY_WINDOW_DAYS,
            max_update_retries: DEFAULT_MAX_UPDATE_RETRIES,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional; unset variables fall back to defaults,
    /// but a set variable that fails to parse is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let offset_minutes: i32 = parse_var("MACROTRACK_DAY_OFFSET_MINUTES")?.unwrap_or(0);
        let day_offset = offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(ConfigError::Invalid {
                name: "MACROTRACK_DAY_OFFSET_MINUTES",
                value: offset_minutes.to_string(),
            })?;

        let urgency_window_days = parse_var("MACROTRACK_URGENCY_WINDOW_DAYS")?
            .unwrap_or(DEFAULT_URGENCY_WINDOW_DAYS);
        if urgency_window_days < 2 {
            return Err(ConfigError::Invalid {
                name: "MACROTRACK_URGENCY_WINDOW_DAYS",
                value: urgency_window_days.to_string(),
            });
        }

        Ok(Self {
            day_offset,
            urgency_window_days,
            max_update_retries: parse_var("MACROTRACK_MAX_UPDATE_RETRIES")?
                .unwrap_or(DEFAULT_MAX_UPDATE_RETRIES),
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        Err(_) => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("MACROTRACK_DAY_OFFSET_MINUTES", "-480");
        env::set_var("MACROTRACK_URGENCY_WINDOW_DAYS", "10");
        env::remove_var("MACROTRACK_MAX_UPDATE_RETRIES");

        let config = EngineConfig::from_env().expect("Config should load");

        assert_eq!(config.day_offset.local_minus_utc(), -480 * 60);
        assert_eq!(config.urgency_window_days, 10);
        assert_eq!(config.max_update_retries, DEFAULT_MAX_UPDATE_RETRIES);

        env::set_var("MACROTRACK_URGENCY_WINDOW_DAYS", "soon");
        let err = EngineConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("MACROTRACK_URGENCY_WINDOW_DAYS"));

        env::remove_var("MACROTRACK_DAY_OFFSET_MINUTES");
        env::remove_var("MACROTRACK_URGENCY_WINDOW_DAYS");
    }

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.day_offset.local_minus_utc(), 0);
        assert_eq!(config.urgency_window_days, 7);
    }
}
