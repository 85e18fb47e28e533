//! Server configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Directory with scam_patterns.json, legitimate_banks.json and case_studies.json
    pub data_dir: PathBuf,

    /// Directory of the static frontend; not served if it does not exist
    pub static_dir: PathBuf,

    /// Log level for this workspace's crates (RUST_LOG takes precedence)
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            data_dir: PathBuf::from("data"),
            static_dir: PathBuf::from("frontend"),
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        Self::load_from("config/server")
    }

    /// Load from `<file_stem>.{toml,json,yaml,...}` (optional) and the environment
    ///
    /// Missing sources leave the defaults in place; a source that exists but
    /// cannot be parsed is an error.
    pub fn load_from(file_stem: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file_stem = file_stem.as_ref().to_string_lossy();

        config::Config::builder()
            .add_source(config::File::with_name(&file_stem).required(false))
            .add_source(config::Environment::with_prefix("REFUNDSHIELD"))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))
    }

    /// Socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default tracing filter derived from `log_level`
    pub fn default_log_filter(&self) -> String {
        format!(
            "refundshield_server={level},refundshield_sdk={level},tower_http=debug",
            level = self.log_level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.static_dir, PathBuf::from("frontend"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.addr(), "127.0.0.1:5000");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let json = serde_json::json!({"port": 8080, "log_format": "json"});
        let config: ServerConfig = serde_json::from_value(json).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_config_from_builder_source() {
        let cfg = config::Config::builder()
            .set_override("host", "0.0.0.0")
            .unwrap()
            .set_override("data_dir", "/srv/refundshield/data")
            .unwrap()
            .build()
            .unwrap();
        let config: ServerConfig = cfg.try_deserialize().unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.data_dir, PathBuf::from("/srv/refundshield/data"));
    }

    #[test]
    fn test_default_log_filter() {
        let config = ServerConfig {
            log_level: "debug".to_string(),
            ..ServerConfig::default()
        };

        assert_eq!(
            config.default_log_filter(),
            "refundshield_server=debug,refundshield_sdk=debug,tower_http=debug"
        );
    }

    #[test]
    fn test_server_config_debug_format() {
        let config = ServerConfig::default();
        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("ServerConfig"));
        assert!(debug_str.contains("127.0.0.1"));
        assert!(debug_str.contains("5000"));
    }
}
