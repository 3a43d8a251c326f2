//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHIPPING_LOG_FORMAT` - `text` or `json` (default: text)
//! - `SHIPPING_INCLUDE_PICKUP_POINTS` - Offer pickup-point options (default: false)
//! - `SHIPPING_INCLUDE_SCHEDULED` - Offer scheduled delivery options (default: false)
//! - `SHIPPING_REQUIRE_COMMON_OPTIONS` - Only offer options every item supports (default: true)
//! - `RUST_LOG` - Log filter (default: `checkout_shipping_core=info,shipping_cli=info`)

use checkout_shipping_core::ShippingRulesConfig;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("expected `text` or `json`, got `{s}`")),
        }
    }
}

/// Shipping CLI configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliConfig {
    /// Log output format
    pub log_format: LogFormat,
    /// Delivery option rules applied to every command
    pub rules: ShippingRulesConfig,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a value that cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = ShippingRulesConfig::default();

        let log_format = get_optional_env("SHIPPING_LOG_FORMAT")
            .map(|value| {
                value.parse::<LogFormat>().map_err(|e| {
                    ConfigError::InvalidEnvVar("SHIPPING_LOG_FORMAT".to_string(), e)
                })
            })
            .transpose()?
            .unwrap_or_default();

        let rules = ShippingRulesConfig {
            include_pickup_points: get_bool_env(
                "SHIPPING_INCLUDE_PICKUP_POINTS",
                defaults.include_pickup_points,
            )?,
            include_scheduled: get_bool_env("SHIPPING_INCLUDE_SCHEDULED", defaults.include_scheduled)?,
            require_common_options: get_bool_env(
                "SHIPPING_REQUIRE_COMMON_OPTIONS",
                defaults.require_common_options,
            )?,
        };

        Ok(Self { log_format, rules })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get a boolean environment variable with a default value.
fn get_bool_env(key: &str, default: bool) -> Result<bool, ConfigError> {
    get_optional_env(key).map_or(Ok(default), |value| {
        parse_bool(&value).ok_or_else(|| {
            ConfigError::InvalidEnvVar(key.to_string(), format!("expected a boolean, got `{value}`"))
        })
    })
}

/// Parse the usual spellings of a boolean flag.
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
