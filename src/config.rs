//! Proxy configuration, read from the environment.
//!
//!   GOMODPROXY_BIND_ADDR   — listen address (default: 0.0.0.0:8080)
//!   GOMODPROXY_STORAGE_DIR — root of the filesystem provider (default: ./storage)

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "GOMODPROXY_BIND_ADDR";
pub const STORAGE_DIR_VAR: &str = "GOMODPROXY_STORAGE_DIR";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_STORAGE_DIR: &str = "./storage";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid GOMODPROXY_BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub bind_addr: SocketAddr,
    pub storage_dir: PathBuf,
}

impl ProxyConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: raw_addr.clone(),
                source,
            })?;
        let storage_dir = lookup(STORAGE_DIR_VAR)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_STORAGE_DIR.into())
            .into();
        Ok(Self {
            bind_addr,
            storage_dir,
        })
    }
}
