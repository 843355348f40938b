use persistence::db::DatabaseConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Output format, `json` or `pretty`.
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Allowed CORS origins. Empty means any origin is accepted.
    pub cors_origins: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("database.url is not set (export FP__DATABASE__URL)")]
    DatabaseUrlMissing,

    #[error("server.port must be nonzero")]
    PortZero,

    #[error("database.min_connections ({min}) exceeds max_connections ({max})")]
    PoolBoundsReversed { min: u32, max: u32 },
}

impl Config {
    /// Load configuration, later sources overriding earlier ones:
    /// config/default.toml, then config/local.toml if present, then
    /// `FP__`-prefixed environment variables (`FP__SERVER__PORT` and so on).
    pub fn load() -> Result<Self, config::ConfigError> {
        let sources = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("FP").separator("__"))
            .build()?;

        let cfg: Self = sources.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Build a config from an embedded baseline plus overrides, with no
    /// filesystem access. Validation is skipped so partial configs work.
    #[cfg(test)]
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let baseline = r#"
            [server]

            [database]
            url = ""

            [logging]

            [security]
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(baseline, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        builder.build()?.try_deserialize()
    }

    fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.database.url.is_empty() {
            return Err(ConfigValidationError::DatabaseUrlMissing);
        }
        if self.server.port == 0 {
            return Err(ConfigValidationError::PortZero);
        }
        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigValidationError::PoolBoundsReversed {
                min: self.database.min_connections,
                max: self.database.max_connections,
            });
        }
        Ok(())
    }

    /// Bind address for the HTTP listener.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
