use std::env;

use thiserror::Error;

/// Port used when `PORT` is unset
pub(crate) const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ConfigError {
    #[error("Invalid PORT value '{0}': expected an integer between 0 and 65535")]
    InvalidPort(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ServerConfig {
    pub(crate) port: u16,
}

impl ServerConfig {
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        Self::from_port_var(env::var("PORT").ok())
    }

    fn from_port_var(value: Option<String>) -> Result<Self, ConfigError> {
        let port = match value {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
        };

        Ok(Self { port })
    }
}
