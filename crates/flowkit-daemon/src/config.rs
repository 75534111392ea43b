use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log_level: {0}")]
    InvalidLogLevel(String),

    #[error("flow_timeout must be positive, got: {0}")]
    InvalidTimeout(i64),

    #[error("max_retries must be non-negative, got: {0}")]
    InvalidRetries(i64),

    #[error("Invalid value for {var}: {value}")]
    InvalidEnvValue { var: String, value: String },

    #[error("Failed to create directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Log verbosity setting, parsed from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            // "critical" has no tracing equivalent, fold it into error
            "error" | "critical" => Ok(LogLevel::Error),
            other => Err(ConfigError::InvalidLogLevel(other.to_string())),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Validated daemon settings.
///
/// Construction validates every scalar and creates both directories;
/// invalid values surface as [`ConfigError`] before anything runs.
/// `flow_timeout` and `max_retries` are declared settings only - nothing
/// in this crate enforces them, callers own any retry or timeout policy.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: Option<String>,
    pub debug: bool,
    pub log_level: LogLevel,
    pub data_dir: PathBuf,
    pub logs_dir: PathBuf,
    /// Flow execution timeout in seconds
    pub flow_timeout: u64,
    /// Maximum retries for failed flow operations
    pub max_retries: u32,
}

impl Config {
    /// Create a config with default settings
    pub fn new() -> Result<Self, ConfigError> {
        Self::builder().build()
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Build a config from environment variables, falling back to the
    /// defaults for anything unset.
    ///
    /// Reads `ANTHROPIC_API_KEY`, `DEBUG`, `LOG_LEVEL`, `DATA_DIR`,
    /// `LOGS_DIR`, `FLOW_TIMEOUT` and `MAX_RETRIES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Ok(key) = env::var("ANTHROPIC_API_KEY") {
            builder = builder.api_key(key);
        }
        if let Ok(value) = env::var("DEBUG") {
            builder = builder.debug(parse_env_bool("DEBUG", &value)?);
        }
        if let Ok(value) = env::var("LOG_LEVEL") {
            builder = builder.log_level(value.parse()?);
        }
        if let Ok(dir) = env::var("DATA_DIR") {
            builder = builder.data_dir(dir);
        }
        if let Ok(dir) = env::var("LOGS_DIR") {
            builder = builder.logs_dir(dir);
        }
        if let Ok(value) = env::var("FLOW_TIMEOUT") {
            builder = builder.flow_timeout(parse_env_i64("FLOW_TIMEOUT", &value)?);
        }
        if let Ok(value) = env::var("MAX_RETRIES") {
            builder = builder.max_retries(parse_env_i64("MAX_RETRIES", &value)?);
        }

        builder.build()
    }
}

fn parse_env_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_env_i64(var: &str, value: &str) -> Result<i64, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidEnvValue {
        var: var.to_string(),
        value: value.to_string(),
    })
}

/// Builder for [`Config`].
///
/// Timeout and retries are held signed until [`build`](Self::build) so
/// out-of-range inputs report a range fault rather than a parse fault.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    api_key: Option<String>,
    debug: bool,
    log_level: LogLevel,
    data_dir: PathBuf,
    logs_dir: PathBuf,
    flow_timeout: i64,
    max_retries: i64,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            debug: false,
            log_level: LogLevel::Info,
            data_dir: PathBuf::from("data"),
            logs_dir: PathBuf::from("logs"),
            flow_timeout: 60,
            max_retries: 3,
        }
    }
}

impl ConfigBuilder {
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn logs_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.logs_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn flow_timeout(mut self, seconds: i64) -> Self {
        self.flow_timeout = seconds;
        self
    }

    pub fn max_retries(mut self, retries: i64) -> Self {
        self.max_retries = retries;
        self
    }

    /// Validate the settings and create the data and log directories
    pub fn build(self) -> Result<Config, ConfigError> {
        if self.flow_timeout <= 0 {
            return Err(ConfigError::InvalidTimeout(self.flow_timeout));
        }
        if self.max_retries < 0 {
            return Err(ConfigError::InvalidRetries(self.max_retries));
        }

        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.logs_dir)?;

        Ok(Config {
            api_key: self.api_key,
            debug: self.debug,
            log_level: self.log_level,
            data_dir: self.data_dir,
            logs_dir: self.logs_dir,
            flow_timeout: self.flow_timeout as u64,
            max_retries: self.max_retries as u32,
        })
    }
}
