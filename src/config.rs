//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines constants for
//! default paths, logging, and shutdown behavior. `AppConfig` is the root
//! configuration struct; every field has a serde default so a partial (or
//! absent) file still yields a runnable configuration.

use serde::Deserialize;
use std::path::Path;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "hello_service=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Interface the HTTP listener binds when not configured (all interfaces,
/// required for the container port mapping to work)
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Port the container contract exposes
pub const DEFAULT_HTTP_PORT: u16 = 5000;

/// Seconds to wait for in-flight requests to drain during graceful shutdown.
/// Must stay below the orchestrator's termination grace period so the process
/// exits cleanly rather than being killed.
pub const SHUTDOWN_GRACE_PERIOD_SECS: u64 = 30;

/// Cache-Control for all responses. Probe responses drive restart and traffic
/// decisions and must never be served stale by an intermediary.
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;

        // Validate: log format must be one the subscriber can produce
        match config.logging.format.as_str() {
            "text" | "json" => {}
            other => {
                return Err(ConfigError::Validation(format!(
                    "Unknown logging.format '{}', expected \"text\" or \"json\"",
                    other
                )))
            }
        }

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_full_config() {
        let file = write_config(
            r#"
            [http]
            host = "127.0.0.1"
            port = 8080

            [logging]
            format = "json"
            "#,
        );

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn empty_file_uses_defaults() {
        let file = write_config("");

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.host, DEFAULT_HTTP_HOST);
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
        assert_eq!(config.logging.format, DEFAULT_LOG_FORMAT);
    }

    #[test]
    fn partial_section_fills_missing_fields() {
        let file = write_config("[http]\nport = 9000\n");

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.host, DEFAULT_HTTP_HOST);
        assert_eq!(config.http.port, 9000);
    }

    #[test]
    fn rejects_unknown_log_format() {
        let file = write_config("[logging]\nformat = \"xml\"\n");

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = AppConfig::load("/nonexistent/hello-service.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let file = write_config("[http\nport = ");

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
