//! Server configuration from the environment

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Listen address variable
pub const ADDR_VAR: &str = "BUG_SWAT_ADDR";
/// Optional rankings snapshot path variable
pub const RANKINGS_VAR: &str = "BUG_SWAT_RANKINGS";

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Restored at startup and written back on shutdown when set
    pub rankings_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_addr = get(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = raw_addr
            .trim()
            .parse()
            .map_err(|e| Error::invalid(format!("{ADDR_VAR}={raw_addr}: {e}")))?;

        Ok(Self {
            addr,
            rankings_path: get(RANKINGS_VAR).map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr, DEFAULT_ADDR.parse::<SocketAddr>().unwrap());
        assert!(config.rankings_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (ADDR_VAR, "0.0.0.0:8080"),
            (RANKINGS_VAR, "/tmp/rankings.json"),
        ]))
        .unwrap();
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.rankings_path, Some(PathBuf::from("/tmp/rankings.json")));
    }

    #[test]
    fn test_bad_addr() {
        let err = ServerConfig::from_lookup(lookup(&[(ADDR_VAR, "not-an-addr")])).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config =
            ServerConfig::from_lookup(lookup(&[(ADDR_VAR, " "), (RANKINGS_VAR, "")])).unwrap();
        assert_eq!(config.addr.port(), 3000);
        assert!(config.rankings_path.is_none());
    }
}
