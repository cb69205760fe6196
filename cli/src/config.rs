use std::fs;
use std::path::{Path, PathBuf};

use battline_platform::{UeventKeys, DEFAULT_BATTERY_PATH};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;

use crate::options::{DEFAULT_ICON_THRESHOLDS, DEFAULT_LOWER_THRESHOLD, DEFAULT_UPPER_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Unknown names fall back to `Off`.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => LogLevel::Error,
            "warn" | "warning" => LogLevel::Warn,
            "info" => LogLevel::Info,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Off,
        }
    }

    pub fn as_tracing_level(&self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub upper: u32,
    pub lower: u32,
    pub icons: Vec<u32>,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            upper: DEFAULT_UPPER_THRESHOLD,
            lower: DEFAULT_LOWER_THRESHOLD,
            icons: DEFAULT_ICON_THRESHOLDS.to_vec(),
        }
    }
}

/// Tier colors. Unset tiers use the output format's default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub good: Option<String>,
    pub middle: Option<String>,
    pub warn: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UeventConfig {
    pub status_key: String,
    pub current_key: String,
    pub full_key: String,
}

impl Default for UeventConfig {
    fn default() -> Self {
        let keys = UeventKeys::default();
        Self {
            status_key: keys.status,
            current_key: keys.current,
            full_key: keys.full,
        }
    }
}

impl From<&UeventConfig> for UeventKeys {
    fn from(config: &UeventConfig) -> Self {
        Self {
            status: config.status_key.clone(),
            current: config.current_key.clone(),
            full: config.full_key.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub log_level: LogLevel,
    /// Log to a rolling file in the runtime dir instead of stderr.
    pub log_file: bool,
    pub battery_path: PathBuf,
    pub use_pmset: bool,
    pub thresholds: ThresholdConfig,
    pub colors: ColorConfig,
    pub uevent: UeventConfig,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Off,
            log_file: false,
            battery_path: PathBuf::from(DEFAULT_BATTERY_PATH),
            use_pmset: false,
            thresholds: ThresholdConfig::default(),
            colors: ColorConfig::default(),
            uevent: UeventConfig::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("battline")
}

pub fn runtime_dir() -> PathBuf {
    dirs::runtime_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("battline")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

impl UserConfig {
    /// Load the user config file. A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
