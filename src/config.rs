use std::collections::HashMap;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::Amount;

/// Seven days, the staking contract's unstake cooldown.
const DEFAULT_UNSTAKE_COOLDOWN_MS: i64 = 604_800_000;

/// Service configuration. The staking constants are consumed, not decided,
/// here: they mirror what the deployed contracts enforce.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Cooldown between requesting an unstake and funds becoming withdrawable.
    pub unstake_cooldown_ms: i64,
    /// Reward distribution cadence; weekly staking means 52.
    pub compounding_periods_per_year: u32,
    /// Fixed reward pool distributed each period.
    pub period_reward_pool: Amount,
    /// Leaderboard page size when the request does not specify one.
    pub default_page_size: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let unstake_cooldown_ms = match env_map.get("UNSTAKE_COOLDOWN_MS") {
            Some(raw) => raw.parse::<i64>().ok().filter(|ms| *ms > 0).ok_or_else(|| {
                ConfigError::InvalidValue(
                    "UNSTAKE_COOLDOWN_MS".to_string(),
                    "must be a positive integer of milliseconds".to_string(),
                )
            })?,
            None => DEFAULT_UNSTAKE_COOLDOWN_MS,
        };

        let compounding_periods_per_year = match env_map.get("COMPOUNDING_PERIODS_PER_YEAR") {
            Some(raw) => raw.parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| {
                ConfigError::InvalidValue(
                    "COMPOUNDING_PERIODS_PER_YEAR".to_string(),
                    "must be a positive integer".to_string(),
                )
            })?,
            None => 52,
        };

        let period_reward_pool = match env_map.get("PERIOD_REWARD_POOL") {
            Some(raw) => Amount::from_str(raw)
                .ok()
                .filter(|a| !a.is_negative())
                .ok_or_else(|| {
                    ConfigError::InvalidValue(
                        "PERIOD_REWARD_POOL".to_string(),
                        "must be a non-negative decimal amount".to_string(),
                    )
                })?,
            None => Amount::from_i64(70_000),
        };

        let default_page_size = match env_map.get("DEFAULT_PAGE_SIZE") {
            Some(raw) => raw.parse::<usize>().ok().filter(|n| *n > 0).ok_or_else(|| {
                ConfigError::InvalidValue(
                    "DEFAULT_PAGE_SIZE".to_string(),
                    "must be a positive integer".to_string(),
                )
            })?,
            None => 15,
        };

        Ok(Config {
            port,
            unstake_cooldown_ms,
            compounding_periods_per_year,
            period_reward_pool,
            default_page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_with_empty_env() {
        let config = Config::from_env_map(HashMap::new()).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.unstake_cooldown_ms, 604_800_000);
        assert_eq!(config.compounding_periods_per_year, 52);
        assert_eq!(config.period_reward_pool, Amount::from_i64(70_000));
        assert_eq!(config.default_page_size, 15);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let mut env_map = HashMap::new();
        env_map.insert("PORT".to_string(), "not_a_number".to_string());
        match Config::from_env_map(env_map) {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "PORT"),
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn zero_cooldown_is_rejected() {
        let mut env_map = HashMap::new();
        env_map.insert("UNSTAKE_COOLDOWN_MS".to_string(), "0".to_string());
        match Config::from_env_map(env_map) {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "UNSTAKE_COOLDOWN_MS"),
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn zero_compounding_periods_is_rejected() {
        let mut env_map = HashMap::new();
        env_map.insert("COMPOUNDING_PERIODS_PER_YEAR".to_string(), "0".to_string());
        assert!(Config::from_env_map(env_map).is_err());
    }

    #[test]
    fn negative_reward_pool_is_rejected() {
        let mut env_map = HashMap::new();
        env_map.insert("PERIOD_REWARD_POOL".to_string(), "-5".to_string());
        assert!(Config::from_env_map(env_map).is_err());
    }

    #[test]
    fn overrides_are_honored() {
        let mut env_map = HashMap::new();
        env_map.insert("PORT".to_string(), "9090".to_string());
        env_map.insert("UNSTAKE_COOLDOWN_MS".to_string(), "1000".to_string());
        env_map.insert("PERIOD_REWARD_POOL".to_string(), "12345.5".to_string());
        let config = Config::from_env_map(env_map).unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.unstake_cooldown_ms, 1_000);
        assert_eq!(config.period_reward_pool, Amount::from_str("12345.5").unwrap());
    }
}
