use std::env;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("config.invalid_value: {name}={value}")]
    InvalidValue { name: String, value: String },
}

/// Reads `name` from the environment, falling back to `default` when unset.
pub fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Reads and parses `name`, falling back to `default` when unset.
pub fn parse_var_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => parse_value(name, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: FromStr>(name: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name: name.to_string(),
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_numeric_value() {
        assert_eq!(parse_value::<u32>("DATABASE_MAX_CONNECTIONS", " 8 "), Ok(8));
    }

    #[test]
    fn should_reject_unparsable_value() {
        let result = parse_value::<u64>("FOOD_API_TIMEOUT_SECS", "ten");
        assert_eq!(
            result,
            Err(ConfigError::InvalidValue {
                name: "FOOD_API_TIMEOUT_SECS".to_string(),
                value: "ten".to_string(),
            })
        );
    }

    #[test]
    fn should_use_default_when_unset() {
        let value: u32 = parse_var_or("FRIDGE_TEST_SURELY_UNSET_VARIABLE", 5).unwrap();
        assert_eq!(value, 5);
    }
}
