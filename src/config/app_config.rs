use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Connection string, required when `backend` is `postgres`
    pub database_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Postgres,
}

/// Cross-origin policy for the `/api` surface
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl AppConfig {
    /// Load from `config/default`, `config/local`, then `APP__*` environment variables
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with_env(config::Environment::with_prefix("APP"))
    }

    fn load_with_env(env: config::Environment) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(env.separator("__").try_parsing(true))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_json(json: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(json, config::FileFormat::Json))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert!(matches!(config.logging.format, LogFormat::Pretty));
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(config.storage.database_url.is_none());
        assert!(config.cors.enabled);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = from_json(r#"{"server": {"port": 9000}, "cors": {"enabled": false}}"#);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert!(!config.cors.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_storage_and_logging_sections() {
        let config = from_json(
            r#"{
                "logging": {"level": "debug", "format": "json"},
                "storage": {"backend": "postgres", "database_url": "postgres://localhost/users"}
            }"#,
        );

        assert!(matches!(config.logging.format, LogFormat::Json));
        assert_eq!(config.storage.backend, StorageBackend::Postgres);
        assert_eq!(
            config.storage.database_url.as_deref(),
            Some("postgres://localhost/users")
        );
    }

    fn env_source(vars: &[(&str, &str)]) -> config::Environment {
        let map = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        config::Environment::with_prefix("APP").source(Some(map))
    }

    #[test]
    fn test_env_overrides_backend() {
        let config = AppConfig::load_with_env(env_source(&[
            ("APP__STORAGE__BACKEND", "postgres"),
            ("APP__STORAGE__DATABASE_URL", "postgres://db/users"),
            ("APP__SERVER__PORT", "9090"),
        ]))
        .unwrap();

        assert_eq!(config.storage.backend, StorageBackend::Postgres);
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn test_invalid_env_value_fails_instead_of_defaulting() {
        let result = AppConfig::load_with_env(env_source(&[
            ("APP__STORAGE__BACKEND", "postgres"),
            ("APP__STORAGE__DATABASE_URL", "postgres://db/users"),
            ("APP__SERVER__PORT", "80800"),
        ]));

        assert!(result.is_err());
    }
}
