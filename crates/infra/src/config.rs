//! Configuration loading and representation.
//!
//! Everything comes from environment variables; unset variables fall back to
//! development defaults.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use thiserror::Error;

use moviedb_observability::LogFormat;

pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8080));
pub const DEFAULT_APP_NAME: &str = "moviedbApp";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(var: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            var,
            reason: reason.into(),
        }
    }
}

/// Process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `BIND_ADDR`
    pub bind_addr: SocketAddr,
    /// `APP_NAME`; used to build the `X-{app}-*` alert header names.
    pub application_name: String,
    /// `DATABASE_URL`; when unset the in-memory store is used.
    pub database_url: Option<String>,
    /// `DATABASE_MAX_CONNECTIONS`
    pub max_connections: u32,
    /// `LOG_FORMAT`
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            application_name: DEFAULT_APP_NAME.to_string(),
            database_url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::invalid("BIND_ADDR", e.to_string()))?,
            None => DEFAULT_BIND_ADDR,
        };

        let application_name =
            lookup("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
        validate_application_name(&application_name)?;

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(0) => return Err(ConfigError::invalid("DATABASE_MAX_CONNECTIONS", "must be positive")),
                Ok(n) => n,
                Err(e) => return Err(ConfigError::invalid("DATABASE_MAX_CONNECTIONS", e.to_string())),
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(|e| ConfigError::invalid("LOG_FORMAT", e))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            application_name,
            database_url,
            max_connections,
            log_format,
        })
    }
}

/// The name ends up inside header names, so it must be a plain token.
fn validate_application_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::invalid("APP_NAME", "must not be empty"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::invalid(
            "APP_NAME",
            "only ASCII letters, digits, '-' and '_' are allowed",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        assert_eq!(load(&[]).unwrap(), AppConfig::default());
    }

    #[test]
    fn unset_bind_addr_listens_on_all_interfaces_port_8080() {
        let cfg = load(&[]).unwrap();
        assert_eq!(cfg.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn reads_every_variable() {
        let cfg = load(&[
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("APP_NAME", "cinema"),
            ("DATABASE_URL", "postgres://localhost/movies"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("LOG_FORMAT", "pretty"),
        ])
        .unwrap();

        assert_eq!(cfg.bind_addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.application_name, "cinema");
        assert_eq!(cfg.database_url.as_deref(), Some("postgres://localhost/movies"));
        assert_eq!(cfg.max_connections, 12);
        assert_eq!(cfg.log_format, LogFormat::Pretty);
    }

    #[test]
    fn blank_database_url_means_in_memory() {
        assert_eq!(load(&[("DATABASE_URL", "  ")]).unwrap().database_url, None);
    }

    #[test]
    fn rejects_application_name_unusable_in_headers() {
        let err = load(&[("APP_NAME", "movie db")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "APP_NAME", .. }));
    }

    #[test]
    fn rejects_bad_numbers_and_addresses() {
        assert!(load(&[("BIND_ADDR", "nowhere")]).is_err());
        assert!(load(&[("DATABASE_MAX_CONNECTIONS", "0")]).is_err());
        assert!(load(&[("DATABASE_MAX_CONNECTIONS", "many")]).is_err());
        assert!(load(&[("LOG_FORMAT", "xml")]).is_err());
    }
}
