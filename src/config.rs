use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_STATIC_DIR: &str = "client/build";

/// Errors that can occur while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Runtime mode, controls whether the front-end bundle is served
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

/// Process configuration read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub host: IpAddr,
    pub port: u16,
    pub environment: Environment,
    pub static_dir: PathBuf,
}

impl Config {
    /// Reads configuration from process environment variables
    ///
    /// # Variables
    /// * `DATABASE_URL` - store connection string (required)
    /// * `DATABASE_MAX_CONNECTIONS` - pool size (default 5)
    /// * `HOST` / `PORT` - listen address (default 0.0.0.0:3000)
    /// * `APP_ENV` - `production` enables static asset serving
    /// * `STATIC_DIR` - front-end bundle directory (default `client/build`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let max_connections = parse_or("DATABASE_MAX_CONNECTIONS", &lookup, DEFAULT_MAX_CONNECTIONS)?;
        let host = parse_or("HOST", &lookup, IpAddr::V4(Ipv4Addr::UNSPECIFIED))?;
        let port = parse_or("PORT", &lookup, DEFAULT_PORT)?;

        let environment = match lookup("APP_ENV").as_deref() {
            Some("production") => Environment::Production,
            _ => Environment::Development,
        };

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        Ok(Self {
            database_url,
            max_connections,
            host,
            port,
            environment,
            static_dir,
        })
    }

    /// Socket address the server binds to
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn serves_static_assets(&self) -> bool {
        self.environment == Environment::Production
    }
}

fn parse_or<T, F>(name: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
