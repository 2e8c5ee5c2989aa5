use serde::Deserialize;
use std::env;
use std::str::FromStr;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub database_url: Option<String>,
    /// Legacy name of the connection string variable.
    pub db_connection_string: Option<String>,
    pub workers: Option<usize>,
    pub max_body_bytes: Option<usize>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(config::Environment::default().try_parsing(true))
            .build()?;

        let config: Config = cfg.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Connection string, `DATABASE_URL` first, then `DB_CONNECTION_STRING`.
    pub fn database_url(&self) -> Result<String, config::ConfigError> {
        self.database_url
            .clone()
            .or_else(|| self.db_connection_string.clone())
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| config::ConfigError::NotFound("DATABASE_URL".to_string()))
    }

    pub fn database_settings(&self) -> Result<DatabaseSettings, config::ConfigError> {
        Ok(DatabaseSettings::default_from_url(self.database_url()?))
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.host.is_empty()
            || !self
                .host
                .chars()
                .all(|c| c.is_alphanumeric() || ".:-_".contains(c))
        {
            return Err(config::ConfigError::Message(
                "Invalid host format".to_string(),
            ));
        }

        if self.port == 0 {
            return Err(config::ConfigError::Message(
                "Port must be greater than zero".to_string(),
            ));
        }

        if self.workers == Some(0) {
            return Err(config::ConfigError::Message(
                "workers must be at least 1".to_string(),
            ));
        }

        // 1KB..16MB
        if let Some(limit) = self.max_body_bytes {
            let min = 1024;
            let max = 16 * 1024 * 1024;
            if limit < min || limit > max {
                return Err(config::ConfigError::Message(format!(
                    "max_body_bytes must be between {} and {} bytes",
                    min, max
                )));
            }
        }

        Ok(())
    }
}

impl Config {
    pub fn effective_max_body_bytes(&self) -> usize {
        self.max_body_bytes.unwrap_or(DEFAULT_MAX_BODY_BYTES)
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub connect_timeout_secs: Option<u64>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
    pub sql_log: Option<bool>,
}

impl DatabaseSettings {
    pub fn default_from_url(url: String) -> Self {
        Self {
            url,
            max_connections: parse_env_var("DATABASE_MAX_CONNECTIONS"),
            min_connections: parse_env_var("DATABASE_MIN_CONNECTIONS"),
            connect_timeout_secs: parse_env_var("DATABASE_CONNECT_TIMEOUT_SECS"),
            acquire_timeout_secs: parse_env_var("DATABASE_ACQUIRE_TIMEOUT_SECS"),
            idle_timeout_secs: parse_env_var("DATABASE_IDLE_TIMEOUT_SECS"),
            sql_log: parse_env_var("DATABASE_SQL_LOG"),
        }
    }

    /// Private in-memory SQLite database, one connection.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: Some(1),
            min_connections: Some(1),
            connect_timeout_secs: None,
            acquire_timeout_secs: None,
            idle_timeout_secs: None,
            sql_log: Some(false),
        }
    }

    pub fn is_sqlite_memory(&self) -> bool {
        self.url.starts_with("sqlite:") && self.url.contains(":memory:")
    }
}

fn parse_env_var<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    env::var(key).ok().and_then(|value| value.parse::<T>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Config {
        Config {
            host: default_host(),
            port: default_port(),
            database_url: None,
            db_connection_string: None,
            workers: None,
            max_body_bytes: None,
        }
    }

    #[test]
    fn defaults_are_valid() {
        let cfg = base();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.effective_max_body_bytes(), DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn rejects_bad_host_and_port() {
        let mut cfg = base();
        cfg.host = "local host;rm".to_string();
        assert!(cfg.validate().is_err());

        let mut cfg = base();
        cfg.port = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_body_limit() {
        let mut cfg = base();
        cfg.max_body_bytes = Some(10);
        assert!(cfg.validate().is_err());

        cfg.max_body_bytes = Some(2048);
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.effective_max_body_bytes(), 2048);
    }

    #[test]
    fn database_url_falls_back_to_legacy_name() {
        let mut cfg = base();
        assert!(cfg.database_url().is_err());

        cfg.db_connection_string = Some("postgres://u:p@localhost/sw".to_string());
        assert_eq!(cfg.database_url().unwrap(), "postgres://u:p@localhost/sw");

        cfg.database_url = Some("sqlite::memory:".to_string());
        assert_eq!(cfg.database_url().unwrap(), "sqlite::memory:");
    }

    #[test]
    fn detects_in_memory_sqlite() {
        assert!(DatabaseSettings::in_memory().is_sqlite_memory());
        assert!(!DatabaseSettings::default_from_url("postgres://localhost/sw".into()).is_sqlite_memory());
    }
}
