//! Database configuration - environment loading
//!
//! Configuration is loaded from environment variables:
//! - `DATABASE_URL`: full connection string (wins over everything below)
//! - `DB_SOCKET`: unix socket directory (used instead of host/port when set)
//! - `DB_HOST` / `DB_PORT`: TCP address (default: localhost:5432)
//! - `DB_USER` / `DB_PASSWORD`: credentials
//! - `DB_NAME`: database name (default: vertigo_db)
//! - `DB_POOL_SIZE`: maximum pooled connections (default: 5)
//! - `DB_ACQUIRE_TIMEOUT_SECS`: wait for a free connection (default: 5)

use std::path::PathBuf;
use std::time::Duration;

use sqlx::postgres::PgConnectOptions;

use crate::db::PoolSettings;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 5432;
const DEFAULT_DATABASE: &str = "vertigo_db";

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },

    #[error("invalid DATABASE_URL: {0}")]
    InvalidUrl(#[source] sqlx::Error),
}

/// Database configuration
#[derive(Debug, Clone, Default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub socket: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
    pub pool: PoolSettings,
}

impl DatabaseConfig {
    /// Create config from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Create config from an arbitrary variable lookup (for testing)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.is_empty());

        let mut pool = PoolSettings::default();
        if let Some(size) = get("DB_POOL_SIZE") {
            pool.max_connections = parse_var("DB_POOL_SIZE", size)?;
        }
        if let Some(secs) = get("DB_ACQUIRE_TIMEOUT_SECS") {
            pool.acquire_timeout = Duration::from_secs(parse_var("DB_ACQUIRE_TIMEOUT_SECS", secs)?);
        }

        let port = get("DB_PORT")
            .map(|port| parse_var("DB_PORT", port))
            .transpose()?;

        Ok(Self {
            url: get("DATABASE_URL"),
            socket: get("DB_SOCKET").map(PathBuf::from),
            host: get("DB_HOST"),
            port,
            user: get("DB_USER"),
            password: get("DB_PASSWORD"),
            database: get("DB_NAME"),
            pool,
        })
    }

    /// Build sqlx connect options.
    ///
    /// A full URL takes precedence; otherwise the discrete settings are used,
    /// connecting through `socket` when one is configured.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = &self.url {
            return url.parse().map_err(ConfigError::InvalidUrl);
        }

        let mut options = PgConnectOptions::new_without_pgpass()
            .host(self.host.as_deref().unwrap_or(DEFAULT_HOST))
            .port(self.port.unwrap_or(DEFAULT_PORT))
            .database(self.database.as_deref().unwrap_or(DEFAULT_DATABASE));

        if let Some(socket) = &self.socket {
            options = options.socket(socket);
        }
        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }

        Ok(options)
    }

    /// Connection target for log lines, without credentials
    pub fn describe(&self) -> String {
        if self.url.is_some() {
            return "DATABASE_URL".to_string();
        }
        let database = self.database.as_deref().unwrap_or(DEFAULT_DATABASE);
        match &self.socket {
            Some(socket) => format!("unix:{}/{}", socket.display(), database),
            None => format!(
                "{}:{}/{}",
                self.host.as_deref().unwrap_or(DEFAULT_HOST),
                self.port.unwrap_or(DEFAULT_PORT),
                database
            ),
        }
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidValue { var, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<DatabaseConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DatabaseConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.pool, PoolSettings::default());
        assert_eq!(config.describe(), "localhost:5432/vertigo_db");

        let options = config.connect_options().unwrap();
        assert_eq!(options.get_host(), "localhost");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_database(), Some("vertigo_db"));
    }

    #[test]
    fn discrete_settings() {
        let config = config(&[
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "6543"),
            ("DB_USER", "clans"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "clans_test"),
            ("DB_POOL_SIZE", "8"),
            ("DB_ACQUIRE_TIMEOUT_SECS", "2"),
        ])
        .unwrap();

        assert_eq!(config.pool.max_connections, 8);
        assert_eq!(config.pool.acquire_timeout, Duration::from_secs(2));
        assert!(!config.describe().contains("secret"));

        let options = config.connect_options().unwrap();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "clans");
        assert_eq!(options.get_database(), Some("clans_test"));
    }

    #[test]
    fn socket_is_described() {
        let config = config(&[("DB_SOCKET", "/cloudsql/project:region:instance")]).unwrap();
        assert_eq!(
            config.describe(),
            "unix:/cloudsql/project:region:instance/vertigo_db"
        );
        assert!(config.connect_options().is_ok());
    }

    #[test]
    fn url_wins() {
        let config = config(&[
            ("DATABASE_URL", "postgres://u:p@example.com:7777/other"),
            ("DB_HOST", "ignored"),
        ])
        .unwrap();

        let options = config.connect_options().unwrap();
        assert_eq!(options.get_host(), "example.com");
        assert_eq!(options.get_port(), 7777);
        assert_eq!(config.describe(), "DATABASE_URL");
    }

    #[test]
    fn invalid_numbers_are_reported() {
        let err = config(&[("DB_POOL_SIZE", "many")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { var: "DB_POOL_SIZE", .. }
        ));

        let err = config(&[("DB_PORT", "-1")]).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for DB_PORT: '-1'");
    }

    #[test]
    fn empty_values_are_unset() {
        let config = config(&[("DB_HOST", ""), ("DATABASE_URL", "")]).unwrap();
        assert!(config.url.is_none());
        assert!(config.host.is_none());
    }
}
