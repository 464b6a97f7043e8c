//! Environment configuration.

use std::net::SocketAddr;

/// Variable holding the listen address.
pub const BIND_ADDR_VAR: &str = "MARE_BIND_ADDR";

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED),
    3000,
);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("MARE_BIND_ADDR='{value}' is not a socket address: {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_bind_addr(std::env::var(BIND_ADDR_VAR).ok().as_deref())
    }

    /// Builds the config from an optional raw address. Blank means default.
    pub fn from_bind_addr(raw: Option<&str>) -> Result<Self, ConfigError> {
        let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(Self::default());
        };
        let bind_addr = value
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: value.to_string(),
                source,
            })?;
        Ok(Self { bind_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_addr() {
        let config = ServerConfig::from_bind_addr(None).unwrap();
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:3000");

        // Blank is treated as unset
        assert_eq!(ServerConfig::from_bind_addr(Some("  ")).unwrap(), config);
    }

    #[test]
    fn test_custom_bind_addr() {
        let config = ServerConfig::from_bind_addr(Some("127.0.0.1:8080")).unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert!(config.bind_addr.ip().is_loopback());
    }

    #[test]
    fn test_invalid_bind_addr() {
        let err = ServerConfig::from_bind_addr(Some("localhost")).unwrap_err();
        assert!(err.to_string().contains("localhost"));
    }
}
