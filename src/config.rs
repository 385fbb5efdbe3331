// region:    --- Imports
use std::str::FromStr;
use thiserror::Error;

// endregion: --- Imports

// region:    --- App Config
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
/// 20MB
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024 * 20;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: String,
    /// In-memory store when unset
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub max_body_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            database_url: None,
            database_max_connections: DEFAULT_MAX_CONNECTIONS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl AppConfig {
    /// Read `BIND_ADDR`, `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS` and `MAX_BODY_BYTES`.
    /// `main` loads a local `.env` into the environment first.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let present = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Ok(Self {
            bind_addr: present("BIND_ADDR").unwrap_or(defaults.bind_addr),
            database_url: present("DATABASE_URL"),
            database_max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                present("DATABASE_MAX_CONNECTIONS"),
                defaults.database_max_connections,
            )?,
            max_body_bytes: parse_or(
                "MAX_BODY_BYTES",
                present("MAX_BODY_BYTES"),
                defaults.max_body_bytes,
            )?,
        })
    }
}

fn parse_or<T: FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
    }
}

// endregion: --- App Config

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert!(config.database_url.is_none());
        assert_eq!(config.max_body_bytes, 20 * 1024 * 1024);
    }

    #[test]
    fn reads_every_variable() {
        let config = AppConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("DATABASE_URL", "postgres://localhost/furniture"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("MAX_BODY_BYTES", " 4096 "),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/furniture")
        );
        assert_eq!(config.database_max_connections, 12);
        assert_eq!(config.max_body_bytes, 4096);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup(&[("DATABASE_URL", "  ")])).unwrap();
        assert!(config.database_url.is_none());
    }

    #[test]
    fn reads_values_from_a_dotenv_file() {
        let path = std::env::temp_dir().join(format!(
            "furniture-registry-config-{}.env",
            std::process::id()
        ));
        std::fs::write(&path, "BIND_ADDR=127.0.0.1:4000\nMAX_BODY_BYTES=1024\n").unwrap();
        let vars: HashMap<String, String> = dotenvy::from_path_iter(&path)
            .unwrap()
            .map(|item| item.unwrap())
            .collect();
        std::fs::remove_file(&path).unwrap();

        let config = AppConfig::from_lookup(|name| vars.get(name).cloned()).unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:4000");
        assert_eq!(config.max_body_bytes, 1024);
        assert!(config.database_url.is_none());
    }

    #[test]
    fn rejects_non_numeric_limits() {
        let err = AppConfig::from_lookup(lookup(&[("MAX_BODY_BYTES", "lots")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for MAX_BODY_BYTES: \"lots\""
        );
    }
}
