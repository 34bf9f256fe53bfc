//! Runtime configuration, read from the environment.
//!
//! | Variable       | Default           |
//! |----------------|-------------------|
//! | `DATABASE_URL` | `sqlite::memory:` |
//! | `BIND_ADDR`    | `0.0.0.0:8080`    |
//!
//! Log filtering is left to `RUST_LOG`.

use std::env;
use std::fmt;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidBindAddr { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBindAddr { value } => {
                write!(f, "BIND_ADDR '{value}' is not a socket address")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `BIND_ADDR` is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the bind address is unparsable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr { value: bind_addr })?;

        Ok(Self {
            database_url,
            bind_addr,
        })
    }
}
