//! Environment-based configuration.

use std::env;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ENVIRONMENT: &str = "sandbox";

/// Runtime environment name, from `ENVIRONMENT` (defaults to sandbox).
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string())
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub port: u16,
}

impl Config {
    /// Read configuration from the process environment. Unset or
    /// unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            environment: get_environment(),
            port,
        }
    }

}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
