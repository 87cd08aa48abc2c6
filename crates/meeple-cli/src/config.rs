//! Export configuration from the environment

use meeple_core::{MeepleError, Result};

const DEFAULT_MYSQL_PORT: u16 = 3306;

/// Connection parameters for the export run.
///
/// Sourced from the environment (optionally via a `.env` file): `USER`,
/// `PASSWORD`, `SERVER` and `DATABASE`. `SERVER` may carry an optional
/// `:port` suffix.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
}

impl ExportConfig {
    /// Read the configuration from the environment
    pub fn from_env() -> Result<Self> {
        let user = require_env("USER")?;
        let password = require_env("PASSWORD")?;
        let server = require_env("SERVER")?;
        let database = require_env("DATABASE")?;
        let (host, port) = split_host_port(&server)?;

        Ok(Self {
            user,
            password,
            host,
            port,
            database,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        MeepleError::Configuration(format!("Missing required environment variable: {}", key))
    })
}

fn split_host_port(server: &str) -> Result<(String, u16)> {
    match server.rsplit_once(':') {
        Some((host, port)) => {
            let port = port.parse::<u16>().map_err(|_| {
                MeepleError::Configuration(format!("Invalid port in SERVER value: {}", server))
            })?;
            Ok((host.to_string(), port))
        }
        None => Ok((server.to_string(), DEFAULT_MYSQL_PORT)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_host_without_port_uses_default() {
        let (host, port) = split_host_port("db.example.com").unwrap();
        assert_eq!(host, "db.example.com");
        assert_eq!(port, DEFAULT_MYSQL_PORT);
    }

    #[test]
    fn test_split_host_with_port() {
        let (host, port) = split_host_port("127.0.0.1:3307").unwrap();
        assert_eq!(host, "127.0.0.1");
        assert_eq!(port, 3307);
    }

    #[test]
    fn test_split_host_with_bad_port_is_an_error() {
        assert!(split_host_port("db.example.com:not-a-port").is_err());
    }
}
