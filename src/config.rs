//! Runtime settings bundled with the site.
//!
//! `assets/config.json` is compiled in and parsed once at startup. Every
//! field has a default so the file only needs to list overrides. Durations
//! are written in milliseconds and converted to clock ticks here so the rest
//! of the app never deals with wall-clock time.

use serde::Deserialize;

use crate::error::ConfigError;

pub const BUNDLED_CONFIG: &str = include_str!("../assets/config.json");

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Discrete clock ticks per real-time second.
    pub ticks_per_sec: u32,
    /// Quiet period before a search query is applied.
    pub search_debounce_ms: u32,
    /// Simulated latency of the sign-in / sign-up stub.
    pub auth_delay_ms: u32,
    /// Minimum number of interests on the profile form. Provisional.
    pub min_interests: usize,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ticks_per_sec: 20,
            search_debounce_ms: 300,
            auth_delay_ms: 900,
            min_interests: 3,
            log_level: "info".to_string(),
        }
    }
}

/// Validated settings with durations already converted to ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub ticks_per_sec: u32,
    pub debounce_ticks: u32,
    pub auth_delay_ticks: u32,
    pub min_interests: usize,
    pub log_level: log::LevelFilter,
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json(BUNDLED_CONFIG)
    }

    pub fn validate(&self) -> Result<Settings, ConfigError> {
        if self.ticks_per_sec == 0 {
            return Err(ConfigError::Zero {
                field: "ticks_per_sec",
            });
        }
        if self.min_interests == 0 {
            return Err(ConfigError::Zero {
                field: "min_interests",
            });
        }
        let log_level = self
            .log_level
            .parse::<log::LevelFilter>()
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))?;

        Ok(Settings {
            ticks_per_sec: self.ticks_per_sec,
            debounce_ticks: ms_to_ticks(self.search_debounce_ms, self.ticks_per_sec),
            auth_delay_ticks: ms_to_ticks(self.auth_delay_ms, self.ticks_per_sec),
            min_interests: self.min_interests,
            log_level,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        // The default config is known-valid.
        let cfg = AppConfig::default();
        Settings {
            ticks_per_sec: cfg.ticks_per_sec,
            debounce_ticks: ms_to_ticks(cfg.search_debounce_ms, cfg.ticks_per_sec),
            auth_delay_ticks: ms_to_ticks(cfg.auth_delay_ms, cfg.ticks_per_sec),
            min_interests: cfg.min_interests,
            log_level: log::LevelFilter::Info,
        }
    }
}

/// Round a millisecond duration up to whole ticks, never below one tick.
pub fn ms_to_ticks(ms: u32, ticks_per_sec: u32) -> u32 {
    let ticks = (ms as u64 * ticks_per_sec as u64).div_ceil(1000);
    ticks.max(1) as u32
}
