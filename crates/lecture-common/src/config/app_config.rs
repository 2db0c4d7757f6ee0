//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use lecture_core::value_objects::{DEFAULT_AVERSION_RATIO, DEFAULT_CONFUSION_THRESHOLD};
use lecture_core::SuggestionPolicy;
use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub suggestions: SuggestionConfig,
    pub store: StoreConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Suggestion generation thresholds
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SuggestionConfig {
    #[serde(default = "default_confusion_threshold")]
    pub confusion_threshold: u32,
    #[serde(default = "default_aversion_ratio")]
    pub aversion_ratio: f64,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            confusion_threshold: default_confusion_threshold(),
            aversion_ratio: default_aversion_ratio(),
        }
    }
}

impl From<SuggestionConfig> for SuggestionPolicy {
    fn from(config: SuggestionConfig) -> Self {
        SuggestionPolicy::new(config.confusion_threshold, config.aversion_ratio)
    }
}

/// Content store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Load the bundled demo lectures at startup
    #[serde(default = "default_seed_demo_content")]
    pub seed_demo_content: bool,
}

// Default value functions
fn default_app_name() -> String {
    "lecture-feedback".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_confusion_threshold() -> u32 {
    DEFAULT_CONFUSION_THRESHOLD
}

fn default_aversion_ratio() -> f64 {
    DEFAULT_AVERSION_RATIO
}

fn default_seed_demo_content() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Entry point for a binary embedding the services. Reads `.env` first,
    /// then the process environment; variables already set win.
    ///
    /// # Errors
    /// Returns an error if a variable is set to an unparsable or out-of-range value
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    /// Returns an error if a value cannot be parsed or is out of range
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match lookup("APP_ENV") {
            None => default_env(),
            Some(value) => match value.to_lowercase().as_str() {
                "production" => Environment::Production,
                "staging" => Environment::Staging,
                "development" => Environment::Development,
                _ => return Err(ConfigError::InvalidValue("APP_ENV", value)),
            },
        };

        let confusion_threshold = match lookup("SUGGESTION_CONFUSION_THRESHOLD") {
            None => default_confusion_threshold(),
            Some(value) => value
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidValue("SUGGESTION_CONFUSION_THRESHOLD", value))?,
        };

        let aversion_ratio = match lookup("SUGGESTION_AVERSION_RATIO") {
            None => default_aversion_ratio(),
            Some(value) => value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|ratio| (0.0..=1.0).contains(ratio))
                .ok_or(ConfigError::InvalidValue("SUGGESTION_AVERSION_RATIO", value))?,
        };

        let seed_demo_content = match lookup("STORE_SEED_DEMO_CONTENT") {
            None => default_seed_demo_content(),
            Some(value) => match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(ConfigError::InvalidValue("STORE_SEED_DEMO_CONTENT", value)),
            },
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            suggestions: SuggestionConfig {
                confusion_threshold,
                aversion_ratio,
            },
            store: StoreConfig { seed_demo_content },
        })
    }

    /// Gating policy derived from the suggestion settings
    pub fn suggestion_policy(&self) -> SuggestionPolicy {
        self.suggestions.into()
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
