//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;

pub const DEFAULT_BIND: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort { value: String, source: ParseIntError },

    /// `TRUTHLENS_BIND` is set but is not an IP address.
    #[error("invalid TRUTHLENS_BIND {value:?}: {source}")]
    InvalidBind { value: String, source: AddrParseError },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `TRUTHLENS_BIND`: listen address, default `0.0.0.0`
    /// - `PORT`: listen port, default `3000`
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind = std::env::var("TRUTHLENS_BIND").ok();
        let port = std::env::var("PORT").ok();
        Self::from_vars(bind.as_deref(), port.as_deref())
    }

    /// Build config from raw variable values; blank values mean "unset".
    pub fn from_vars(bind: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        let bind = match non_blank(bind) {
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|source| ConfigError::InvalidBind { value: raw.to_owned(), source })?,
            None => DEFAULT_BIND,
        };
        let port = match non_blank(port) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value: raw.to_owned(), source })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { bind, port })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
