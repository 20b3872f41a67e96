//! Server configuration loaded from environment variables.

use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, Error};

const DEFAULT_BIND_PORT: u16 = 8080;
const DEFAULT_DEMO_USER_ID: i32 = 1;

pub struct Config {
    /// Address the HTTP listener binds to (`BIND_ADDRESS`).
    pub bind_address: SocketAddr,
    /// Whether to populate the store with the demo user, test and result (`SEED_DEMO_DATA`).
    pub seed_demo_data: bool,
    /// User whose results the dashboard shows (`DEMO_USER_ID`).
    pub demo_user_id: i32,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// Every variable is optional; unset variables fall back to their defaults.
    ///
    /// # Returns
    /// - `Ok(Config)` - All present variables parsed
    /// - `Err(Error::ConfigError)` - A variable is set to an invalid value
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address = match lookup("BIND_ADDRESS") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: format!("{:?} is not a socket address such as 0.0.0.0:8080", value),
            })?,
            None => SocketAddr::from(([0, 0, 0, 0], DEFAULT_BIND_PORT)),
        };

        let seed_demo_data = match lookup("SEED_DEMO_DATA") {
            Some(value) => parse_bool("SEED_DEMO_DATA", &value)?,
            None => true,
        };

        let demo_user_id = match lookup("DEMO_USER_ID") {
            Some(value) => match value.trim().parse::<i32>() {
                Ok(id) if id >= 1 => id,
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "DEMO_USER_ID".to_string(),
                        reason: format!("{:?} is not a positive integer", value),
                    }
                    .into())
                }
            },
            None => DEFAULT_DEMO_USER_ID,
        };

        Ok(Self {
            bind_address,
            seed_demo_data,
            demo_user_id,
        })
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("{:?} is not one of true, false, 1, 0", value),
        }),
    }
}
