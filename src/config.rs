//! Host configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Errors produced while reading host configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),

    #[error("invalid BIND_ADDR '{0}'")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// JSON conversation seed; the built-in threads when unset.
    pub seed_file: Option<PathBuf>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT, seed_file: None }
    }
}

impl HostConfig {
    /// Build host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `SEED_FILE`: path to a JSON array of conversations
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("BIND_ADDR").ok().as_deref(),
            std::env::var("SEED_FILE").ok().as_deref(),
        )
    }

    fn from_values(port: Option<&str>, bind_addr: Option<&str>, seed_file: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
        };
        let bind_addr = match bind_addr.map(str::trim) {
            None | Some("") => DEFAULT_BIND_ADDR,
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidBindAddr(raw.to_owned()))?,
        };
        let seed_file = seed_file.map(str::trim).filter(|raw| !raw.is_empty()).map(PathBuf::from);
        Ok(Self { bind_addr, port, seed_file })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
