//! Server configuration, read from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DATABASE_URL` | `sqlite://todo.db` |
//! | `HOST` | `127.0.0.1` |
//! | `PORT` | `3000` |
//! | `CORS_ORIGIN` | `http://localhost:5173` |

use std::{env, net::SocketAddr};

use thiserror::Error;
use tokio::net::lookup_host;

const DEFAULT_DATABASE_URL: &str = "sqlite://todo.db";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a port number, got {0:?}")]
    InvalidPort(String),

    #[error("{host}:{port} is not a valid listen address")]
    InvalidAddress { host: String, port: u16 },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// The single origin allowed to call the API from a browser.
    pub cors_origin: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            cors_origin: lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
        })
    }

    /// Resolves `HOST:PORT`. `HOST` may be an IP literal or a host name.
    pub async fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let invalid = || ConfigError::InvalidAddress {
            host: self.host.clone(),
            port: self.port,
        };

        lookup_host((self.host.as_str(), self.port))
            .await
            .map_err(|_| invalid())?
            .next()
            .ok_or_else(invalid)
    }
}
