use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_lifetime_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
        }
    }
}

fn default_namespace() -> String {
    "review-api/v1".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SiteConfig {
    /// Offset of the site's local time from UTC, used for reply `date`
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy DATABASE_URL / JWT_SECRET
    /// 2. Environment variables (REPLYKIT__DATABASE__URL, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite:replykit.db")?
            .set_default("database.max_connections", 5)?
            .set_default("auth.token_lifetime_seconds", 3600)?
            .set_default("api.namespace", default_namespace())?
            .set_default("site.utc_offset_minutes", 0)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("REPLYKIT")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }
        if let Ok(jwt_secret) = env::var("JWT_SECRET") {
            builder = builder.set_override("auth.jwt_secret", jwt_secret)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.auth.jwt_secret.len() < 32 {
            return Err("JWT secret must be at least 32 characters long".to_string());
        }
        if self.auth.token_lifetime_seconds == 0 {
            return Err("Token lifetime must be greater than 0".to_string());
        }
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        let namespace = self.api.namespace.trim_matches('/');
        if namespace.is_empty() || namespace.contains("//") || namespace.contains(['{', '}']) {
            return Err(format!("Invalid API namespace '{}'", self.api.namespace));
        }

        // chrono::FixedOffset accepts strictly less than 24h
        if self.site.utc_offset_minutes.abs() >= 24 * 60 {
            return Err("Site UTC offset must be within +/- 23:59".to_string());
        }

        Ok(())
    }

    /// Namespace as a router prefix, e.g. `/review-api/v1`.
    pub fn namespace_path(&self) -> String {
        format!("/{}", self.api.namespace.trim_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                url: "sqlite:test.db".to_string(),
                max_connections: 5,
            },
            auth: AuthConfig {
                jwt_secret: "test_secret_key_minimum_32_characters_long".to_string(),
                token_lifetime_seconds: 3600,
            },
            api: ApiConfig::default(),
            site: SiteConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validation_short_secret() {
        let mut config = valid_config();
        config.auth.jwt_secret = "short".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = valid_config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_connections() {
        let mut config = valid_config();
        config.database.max_connections = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_namespace() {
        let mut config = valid_config();
        config.api.namespace = "/".to_string();
        assert!(config.validate().is_err());

        config.api.namespace = "reviews/{id}".to_string();
        assert!(config.validate().is_err());

        config.api.namespace = "/wc-review-api/v1/".to_string();
        assert!(config.validate().is_ok());
        assert_eq!(config.namespace_path(), "/wc-review-api/v1");
    }

    #[test]
    fn test_validation_utc_offset() {
        let mut config = valid_config();
        config.site.utc_offset_minutes = -330;
        assert!(config.validate().is_ok());

        config.site.utc_offset_minutes = 24 * 60;
        assert!(config.validate().is_err());
    }
}
