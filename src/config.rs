use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Application configuration
///
/// Every section has defaults, so the crate works with no config file
/// present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub moderation: ModerationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default = "default_schedule_threshold")]
    pub schedule_threshold: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            schedule_threshold: default_schedule_threshold(),
        }
    }
}

/// Weights for the compatibility composer, tunable without touching the
/// algorithm
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_proximity_weight")]
    pub proximity: f64,
    #[serde(default = "default_interests_weight")]
    pub interests: f64,
    #[serde(default = "default_traits_weight")]
    pub traits: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            proximity: default_proximity_weight(),
            interests: default_interests_weight(),
            traits: default_traits_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            proximity: config.proximity,
            interests: config.interests,
            traits: config.traits,
        }
    }
}

fn default_proximity_weight() -> f64 { 0.3 }
fn default_interests_weight() -> f64 { 0.4 }
fn default_traits_weight() -> f64 { 0.3 }
fn default_schedule_threshold() -> f64 { 0.7 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Distance at or under which a pair scores as near
    #[serde(default = "default_near_radius_km")]
    pub near_radius_km: f64,
    /// Default radius for nearby-user sweeps
    #[serde(default = "default_search_radius_km")]
    pub search_radius_km: f64,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            near_radius_km: default_near_radius_km(),
            search_radius_km: default_search_radius_km(),
        }
    }
}

fn default_near_radius_km() -> f64 { 10.0 }
fn default_search_radius_km() -> f64 { 25.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct ModerationSettings {
    /// Keyword blocklist; matched case-insensitively as substrings
    #[serde(default)]
    pub blocklist: Vec<String>,
    #[serde(default = "default_flag_threshold")]
    pub flag_threshold: u32,
}

impl Default for ModerationSettings {
    fn default() -> Self {
        Self {
            blocklist: Vec::new(),
            flag_threshold: default_flag_threshold(),
        }
    }
}

fn default_flag_threshold() -> u32 { 3 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with AMORA_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with AMORA_)
            // e.g., AMORA_SCORING__SCHEDULE_THRESHOLD -> scoring.schedule_threshold
            .add_source(
                Environment::with_prefix("AMORA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("AMORA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
