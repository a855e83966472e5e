use std::time::Duration;

use openfoodfacts::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

use super::env::{ConfigError, parse_var_or, var_or};

/// Configuration for the external product lookup.
pub struct FoodApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl FoodApiConfig {
    /// Environment variables:
    /// - FOOD_API_BASE_URL (default: Open Food Facts v0 product endpoint)
    /// - FOOD_API_TIMEOUT_SECS (default: 10, must be at least 1)
    pub fn from_env() -> Result<Self, ConfigError> {
        let timeout_secs = parse_var_or(TIMEOUT_VAR, DEFAULT_TIMEOUT.as_secs())?;
        Ok(Self {
            base_url: var_or("FOOD_API_BASE_URL", DEFAULT_BASE_URL),
            timeout: timeout_from_secs(timeout_secs)?,
        })
    }
}

const TIMEOUT_VAR: &str = "FOOD_API_TIMEOUT_SECS";

// A zero timeout fails every request before it is sent.
fn timeout_from_secs(secs: u64) -> Result<Duration, ConfigError> {
    if secs == 0 {
        return Err(ConfigError::InvalidValue {
            name: TIMEOUT_VAR.to_string(),
            value: secs.to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}
