use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ModelInfo;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub model: ModelSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

/// Metadata reported for the served model
#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    #[serde(default = "default_model_name")]
    pub name: String,
    pub version: Option<String>,
    pub accuracy: Option<f64>,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            name: default_model_name(),
            version: None,
            accuracy: None,
        }
    }
}

fn default_model_name() -> String { "iris-centroid".to_string() }

impl ModelSettings {
    pub fn to_model_info(&self) -> ModelInfo {
        let mut info = ModelInfo::new(self.name.clone());
        if let Some(version) = &self.version {
            info = info.with_version(version.clone());
        }
        if let Some(accuracy) = self.accuracy {
            info = info.with_accuracy(accuracy);
        }
        info
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Full,
}

impl LogFormat {
    /// Unknown names fall back to `Full`
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Full,
        }
    }
}

impl LoggingSettings {
    pub fn log_format(&self) -> LogFormat {
        LogFormat::parse(&self.format)
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Later sources override earlier ones:
    /// 1. Defaults on the structs
    /// 2. config/default.toml
    /// 3. config/local.toml
    /// 4. Environment variables prefixed with IRIS, e.g. IRIS__SERVER__PORT -> server.port
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }

    /// Load from `IRIS_CONFIG` when it names a file, otherwise from the default locations
    pub fn load_from_env() -> Result<Self, ConfigError> {
        match std::env::var("IRIS_CONFIG") {
            Ok(path) if !path.trim().is_empty() => Self::load_from(path.trim()),
            _ => Self::load(),
        }
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("IRIS")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
