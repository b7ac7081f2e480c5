//! Runtime settings
//!
//! Loaded from defaults, an optional TOML file and `CYBERSATHI_` prefixed
//! environment variables (e.g. `CYBERSATHI_RETRY__MAX_ATTEMPTS=5`).

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default config file path, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "cybersathi.toml";

/// Retry policy applied to every collaborator call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts, including the first one
    pub max_attempts: u32,
    /// First retry delay; doubles per attempt
    pub base_delay_ms: u64,
    /// Ceiling for the exponential delay
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 200,
            max_delay_ms: 5_000,
        }
    }
}

/// Session lifecycle knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Sessions idle longer than this are evicted
    pub idle_ttl_secs: u64,
    /// How often the background sweeper runs
    pub sweep_interval_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_ttl_secs: 30 * 60,
            sweep_interval_secs: 60,
        }
    }
}

/// Ticket generation knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketConfig {
    /// How many fresh tickets to try when the store reports a collision
    pub max_regenerate_attempts: u32,
}

impl Default for TicketConfig {
    fn default() -> Self {
        Self {
            max_regenerate_attempts: 3,
        }
    }
}

/// All runtime tunables for the intake engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub retry: RetryConfig,
    pub session: SessionConfig,
    pub ticket: TicketConfig,
    /// Bounded timeout for each collaborator call
    pub collaborator_timeout_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            retry: RetryConfig::default(),
            session: SessionConfig::default(),
            ticket: TicketConfig::default(),
            collaborator_timeout_ms: 8_000,
        }
    }
}

/// Load settings from the optional config file and the environment.
pub fn load_settings(config_file: Option<&str>) -> Result<Settings, ConfigError> {
    let file = config_file.unwrap_or(DEFAULT_CONFIG_FILE);
    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(file).required(false))
        .add_source(
            config::Environment::with_prefix("CYBERSATHI")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;
    Ok(settings)
}
