//! Runtime configuration for the source adapters
//!
//! Built once from the environment at startup and passed by reference into
//! the adapters. SuperJob cannot be queried without a registered app id,
//! so a missing `SUPERJOB_API_KEY` aborts the run before any fetching.

use crate::types::{Result, VacstatError};
use std::env;

/// Default request identity when `HH_USER_AGENT` is not set
const DEFAULT_USER_AGENT: &str = concat!("vacstat/", env!("CARGO_PKG_VERSION"));

/// Per-source credentials and request identity
#[derive(Debug, Clone)]
pub struct Config {
    /// User-Agent header sent to both APIs
    pub user_agent: String,
    /// SuperJob application id (X-Api-App-Id header)
    pub superjob_api_key: String,
}

impl Config {
    /// Build a config from the environment (after `.env` has been loaded)
    pub fn from_env() -> Result<Self> {
        let user_agent =
            env::var("HH_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
        let superjob_api_key = env::var("SUPERJOB_API_KEY").map_err(|_| {
            VacstatError::Config(
                "SUPERJOB_API_KEY is not set; register an app at api.superjob.ru and put \
                 the key in the environment or a .env file"
                    .into(),
            )
        })?;

        Ok(Self {
            user_agent,
            superjob_api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations cannot race each other
    #[test]
    fn test_from_env_round_trip() {
        env::remove_var("SUPERJOB_API_KEY");
        env::remove_var("HH_USER_AGENT");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("SUPERJOB_API_KEY"));

        env::set_var("SUPERJOB_API_KEY", "v3.test-key");
        let config = Config::from_env().unwrap();
        assert_eq!(config.superjob_api_key, "v3.test-key");
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);

        env::set_var("HH_USER_AGENT", "survey-bot/2.0");
        let config = Config::from_env().unwrap();
        assert_eq!(config.user_agent, "survey-bot/2.0");

        env::remove_var("SUPERJOB_API_KEY");
        env::remove_var("HH_USER_AGENT");
    }
}
