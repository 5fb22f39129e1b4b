//! API server configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                | Default     |
//! |-------------------------|-------------|
//! | `POINTS_HOST`           | `0.0.0.0`   |
//! | `POINTS_PORT`           | `9080`      |
//! | `POINTS_MAX_BODY_BYTES` | `1048576`   |

use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, SocketAddr};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 9080;
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// API server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: IpAddr,

    /// HTTP port
    pub port: u16,

    /// Largest accepted request body, in bytes
    pub max_body_bytes: usize,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// `load` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = ApiConfig {
            host: lookup("POINTS_HOST")
                .unwrap_or_else(|| DEFAULT_HOST.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("POINTS_HOST".to_string()))?,

            port: lookup("POINTS_PORT")
                .unwrap_or_else(|| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("POINTS_PORT".to_string()))?,

            max_body_bytes: lookup("POINTS_MAX_BODY_BYTES")
                .unwrap_or_else(|| DEFAULT_MAX_BODY_BYTES.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("POINTS_MAX_BODY_BYTES".to_string()))?,
        };

        if config.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue(
                "POINTS_MAX_BODY_BYTES".to_string(),
            ));
        }

        Ok(config)
    }

    /// Address the server listens on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
