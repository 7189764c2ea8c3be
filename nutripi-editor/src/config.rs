use std::env;

use dotenv::dotenv;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

#[derive(Debug, PartialEq)]
pub struct Config {
    pub account_api_url: String,
    pub account_api_token: Option<String>,
}

impl Config {
    /// Reads `ACCOUNT_API_URL` and optionally `ACCOUNT_API_TOKEN`, after loading `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let set = |key: &str| var(key).filter(|value| !value.trim().is_empty());

        Ok(Self {
            account_api_url: set("ACCOUNT_API_URL")
                .ok_or(ConfigError::Missing("ACCOUNT_API_URL"))?,
            account_api_token: set("ACCOUNT_API_TOKEN"),
        })
    }
}
