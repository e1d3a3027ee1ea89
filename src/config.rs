//! Runtime configuration, read from environment variables once at startup.
//!
//! | Variable | Default |
//! |---|---|
//! | `QUICKBITE_HOST` | `0.0.0.0` |
//! | `QUICKBITE_PORT` | `8000` |
//! | `QUICKBITE_ORDER_BUFFER` | `32` |
//! | `QUICKBITE_CORS_ORIGINS` | `*` |

use std::{env, fmt::Display, str::FromStr};

use thiserror::Error;
use tracing::info;

pub const HOST_VAR: &str = "QUICKBITE_HOST";
pub const PORT_VAR: &str = "QUICKBITE_PORT";
pub const ORDER_BUFFER_VAR: &str = "QUICKBITE_ORDER_BUFFER";
pub const CORS_ORIGINS_VAR: &str = "QUICKBITE_CORS_ORIGINS";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Which origins the CORS layer lets through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

impl FromStr for CorsOrigins {
    type Err = String;

    /// A `*` anywhere in the list widens it to any origin.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let origins: Vec<String> = s
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();
        if origins.is_empty() {
            return Err("expected \"*\" or a comma-separated list of origins".to_string());
        }
        if origins.iter().any(|origin| origin == "*") {
            return Ok(CorsOrigins::Any);
        }
        Ok(CorsOrigins::List(origins))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Mailbox capacity of the order actor.
    pub order_buffer: usize,
    pub cors_origins: CorsOrigins,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Missing keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let order_buffer: usize = try_load(&lookup, ORDER_BUFFER_VAR, "32")?;
        if order_buffer == 0 {
            return Err(ConfigError::Invalid {
                key: ORDER_BUFFER_VAR,
                value: order_buffer.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            host: try_load(&lookup, HOST_VAR, "0.0.0.0")?,
            port: try_load(&lookup, PORT_VAR, "8000")?,
            order_buffer,
            cors_origins: try_load(&lookup, CORS_ORIGINS_VAR, "*")?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            order_buffer: 32,
            cors_origins: CorsOrigins::Any,
        }
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}
